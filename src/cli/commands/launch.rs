//! Launch command implementation.
//!
//! The `pflaunch launch` command resolves an installed version against the
//! host runtime, applies a license profile after probing the license host,
//! and starts the executable detached.

use crate::cli::args::LaunchArgs;
use crate::config::{Preferences, Settings};
use crate::discovery::{list_installed, resolve, InstalledVersion, RuntimeVersion, PF_EXECUTABLE};
use crate::error::{PflaunchError, Result};
use crate::launcher;
use crate::license::{apply_profile, LicenseProfile, Pinger, StaticPing, SystemPing, FEATURES};
use crate::session::DryRunSession;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The launch command implementation.
pub struct LaunchCommand {
    settings: Settings,
    args: LaunchArgs,
}

impl LaunchCommand {
    /// Create a new launch command.
    pub fn new(settings: Settings, args: LaunchArgs) -> Self {
        Self { settings, args }
    }

    fn prompts_allowed(&self, ui: &dyn UserInterface) -> bool {
        ui.is_interactive() && !self.args.non_interactive
    }

    /// Pick the version to resolve, prompting when several are installed.
    fn select_version(
        &self,
        ui: &mut dyn UserInterface,
        installed: &[InstalledVersion],
    ) -> Result<Option<String>> {
        if let Some(name) = &self.args.version {
            return Ok(Some(name.clone()));
        }
        if self.prompts_allowed(ui) && installed.len() > 1 {
            let items: Vec<String> = installed.iter().map(|v| v.name.clone()).collect();
            let default = items
                .iter()
                .position(|n| n == &self.settings.default_version)
                .unwrap_or(items.len() - 1);
            let choice = ui.select("Select PowerFactory version", &items, default)?;
            return Ok(Some(items[choice].clone()));
        }
        Ok(None)
    }

    /// Build the license profile from flags, prompts or saved preferences.
    fn build_profile(&self, ui: &mut dyn UserInterface) -> Result<LicenseProfile> {
        if self.args.all_features {
            return Ok(LicenseProfile::all());
        }
        if !self.args.features.is_empty() {
            return LicenseProfile::from_keys(&self.args.features);
        }
        if self.prompts_allowed(ui) {
            let items: Vec<String> = FEATURES
                .iter()
                .map(|f| format!("{} ({})", f.label, f.key))
                .collect();
            let picks = ui.multi_select("Select license modules", &items)?;
            let keys: Vec<&str> = picks.iter().map(|&i| FEATURES[i].key).collect();
            return LicenseProfile::from_keys(&keys);
        }

        // Without prompts, fall back to what the last launch used. Stale
        // keys in the preferences file degrade to the base profile.
        let prefs = Preferences::load();
        LicenseProfile::from_keys(&prefs.last_features).or_else(|_| Ok(LicenseProfile::default()))
    }
}

impl Command for LaunchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installed = match list_installed(
            &self.settings.install_root,
            &self.settings.version_pattern,
            self.settings.min_year,
        ) {
            Ok(v) => v,
            Err(e @ PflaunchError::NoVersionsFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let selected = self.select_version(ui, &installed)?;

        let runtime = match self
            .args
            .runtime
            .as_deref()
            .or(self.settings.runtime.as_deref())
        {
            Some(v) => RuntimeVersion::new(v),
            None => RuntimeVersion::detect()?,
        };

        let paths = resolve(
            selected.as_deref(),
            &installed,
            &runtime,
            &self.settings.default_version,
            &self.settings.denied_runtimes,
        )?;

        ui.message(&format!(
            "Resolved {} (runtime {})",
            paths.version, runtime
        ));
        ui.message(&format!("  install: {}", paths.install_path.display()));
        ui.message(&format!("  support: {}", paths.support_path.display()));

        let profile = if self.args.no_license {
            LicenseProfile::default()
        } else {
            self.build_profile(ui)?
        };

        if self.args.dry_run {
            if self.args.no_license {
                ui.message("Would skip license profile application");
            } else if profile.is_empty() {
                ui.message("Would reset the license profile to base modules");
            } else {
                ui.message(&format!(
                    "Would enable license modules: {}",
                    profile.keys().join(", ")
                ));
            }
            ui.message(&format!(
                "Would start {}",
                paths.install_path.join(PF_EXECUTABLE).display()
            ));
            ui.success("Dry run complete, nothing was changed");
            return Ok(CommandResult::success());
        }

        if !self.args.no_license {
            let pinger: Box<dyn Pinger> = if self.args.skip_ping {
                Box::new(StaticPing(true))
            } else {
                Box::new(SystemPing)
            };
            let mut session = DryRunSession::new();
            let mut spinner = ui.start_spinner(&format!(
                "Applying license profile via {}",
                self.settings.license_host
            ));
            match apply_profile(
                &profile,
                &self.settings.license_host,
                pinger.as_ref(),
                &mut session,
            ) {
                Ok(()) => spinner.finish_success("License profile applied"),
                Err(e) => {
                    spinner.finish_error("License profile not applied");
                    return Err(e);
                }
            }
        }

        let pid = launcher::launch(&paths)?;
        ui.success(&format!("Started {} (pid {})", paths.version, pid));

        let mut prefs = Preferences::load();
        prefs.record_launch(&paths.version, &profile.keys());
        if let Err(e) = prefs.save() {
            ui.warning(&format!("Could not save preferences: {}", e));
        }

        Ok(CommandResult::success())
    }
}
