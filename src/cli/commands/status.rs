//! Status command implementation.
//!
//! The `pflaunch status` command shows the resolved configuration: which
//! version would launch, against which runtime, and what the last launch
//! used.

use crate::cli::args::StatusArgs;
use crate::config::{Preferences, Settings};
use crate::discovery::{list_installed, resolve, RuntimeVersion};
use crate::error::Result;
use crate::license::{Pinger, SystemPing};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    settings: Settings,
    args: StatusArgs,
    pinger: Box<dyn Pinger>,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(settings: Settings, args: StatusArgs) -> Self {
        Self {
            settings,
            args,
            pinger: Box::new(SystemPing),
        }
    }

    /// Swap the reachability probe (tests use a fixed answer).
    pub fn with_pinger(mut self, pinger: Box<dyn Pinger>) -> Self {
        self.pinger = pinger;
        self
    }

    fn runtime(&self) -> Result<RuntimeVersion> {
        match self
            .args
            .runtime
            .as_deref()
            .or(self.settings.runtime.as_deref())
        {
            Some(v) => Ok(RuntimeVersion::new(v)),
            None => RuntimeVersion::detect(),
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runtime = self.runtime().ok();
        let installed = list_installed(
            &self.settings.install_root,
            &self.settings.version_pattern,
            self.settings.min_year,
        )
        .unwrap_or_default();

        // Resolution is reported, not required; status stays informative on
        // a broken setup.
        let resolved = runtime.as_ref().and_then(|rt| {
            resolve(
                None,
                &installed,
                rt,
                &self.settings.default_version,
                &self.settings.denied_runtimes,
            )
            .ok()
        });

        let prefs = Preferences::load();
        let host_reachable = self.pinger.ping(&self.settings.license_host);

        if self.args.json {
            let payload = serde_json::json!({
                "install_root": self.settings.install_root,
                "license_host": self.settings.license_host,
                "license_host_reachable": host_reachable,
                "runtime": runtime.as_ref().map(|r| r.as_str()),
                "installed": installed.iter().map(|v| v.name.clone()).collect::<Vec<_>>(),
                "resolved": resolved.as_ref().map(|p| serde_json::json!({
                    "version": p.version,
                    "install_path": p.install_path,
                    "support_path": p.support_path,
                })),
                "last_launch": prefs.last_launch,
                "last_version": prefs.last_version,
            });
            ui.message(
                &serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string()),
            );
            return Ok(CommandResult::success());
        }

        ui.message(&format!(
            "Install root:  {}",
            self.settings.install_root.display()
        ));
        if host_reachable {
            ui.message(&format!(
                "License host:  {} (reachable)",
                self.settings.license_host
            ));
        } else {
            ui.warning(&format!(
                "License host:  {} (unreachable)",
                self.settings.license_host
            ));
        }
        match &runtime {
            Some(rt) => ui.message(&format!("Host runtime:  {}", rt)),
            None => ui.warning("Host runtime:  not detected (pass --runtime X.Y)"),
        }
        ui.message(&format!("Installed:     {} version(s)", installed.len()));
        match &resolved {
            Some(p) => ui.success(&format!("Would launch:  {}", p.version)),
            None => ui.warning("Would launch:  nothing resolvable"),
        }
        if let (Some(version), Some(at)) = (&prefs.last_version, &prefs.last_launch) {
            ui.message(&format!(
                "Last launch:   {} at {}",
                version,
                at.format("%Y-%m-%d %H:%M UTC")
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::StaticPing;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn settings_for(root: &TempDir) -> Settings {
        Settings {
            install_root: root.path().to_path_buf(),
            runtime: Some("3.8".to_string()),
            ..Settings::default()
        }
    }

    #[test]
    fn status_reports_resolvable_setup() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(
            temp.path()
                .join("PowerFactory 2020")
                .join("Python")
                .join("3.8"),
        )
        .unwrap();
        let cmd = StatusCommand::new(settings_for(&temp), StatusArgs::default())
            .with_pinger(Box::new(StaticPing(true)));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Host runtime:  3.8"));
        assert!(ui.has_message("digsilent2 (reachable)"));
        assert!(ui.has_success("Would launch:  PowerFactory 2020"));
    }

    #[test]
    fn status_succeeds_on_empty_root() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(settings_for(&temp), StatusArgs::default())
            .with_pinger(Box::new(StaticPing(false)));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("digsilent2 (unreachable)"));
        assert!(ui.has_message("0 version(s)"));
        assert!(ui.has_warning("nothing resolvable"));
    }

    #[test]
    fn json_output_is_parseable() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(
            temp.path()
                .join("PowerFactory 2020")
                .join("Python")
                .join("3.8"),
        )
        .unwrap();
        let args = StatusArgs {
            json: true,
            ..Default::default()
        };
        let cmd = StatusCommand::new(settings_for(&temp), args)
            .with_pinger(Box::new(StaticPing(true)));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed["runtime"], "3.8");
        assert_eq!(parsed["license_host_reachable"], true);
        assert_eq!(parsed["resolved"]["version"], "PowerFactory 2020");
        assert_eq!(parsed["installed"][0], "PowerFactory 2020");
    }

    #[test]
    fn runtime_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(
            temp.path()
                .join("PowerFactory 2020")
                .join("Python")
                .join("3.9"),
        )
        .unwrap();
        let args = StatusArgs {
            runtime: Some("3.9".into()),
            ..Default::default()
        };
        let cmd = StatusCommand::new(settings_for(&temp), args)
            .with_pinger(Box::new(StaticPing(true)));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("Host runtime:  3.9"));
        assert!(ui.has_success("Would launch:  PowerFactory 2020"));
    }
}
