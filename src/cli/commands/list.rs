//! List command implementation.
//!
//! The `pflaunch list` command shows installed versions and which runtime
//! support directories each one bundles.

use crate::cli::args::ListArgs;
use crate::config::Settings;
use crate::discovery::resolver::supported_runtimes;
use crate::discovery::{deep_scan, list_installed, InstalledVersion, SUPPORT_SUBDIR};
use crate::error::{PflaunchError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    settings: Settings,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(settings: Settings, args: ListArgs) -> Self {
        Self { settings, args }
    }

    fn print_json(&self, ui: &mut dyn UserInterface, versions: &[InstalledVersion]) {
        let entries: Vec<serde_json::Value> = versions
            .iter()
            .map(|v| {
                serde_json::json!({
                    "name": v.name,
                    "year": v.year,
                    "install_path": v.install_path,
                    "runtimes": supported_runtimes(&v.install_path.join(SUPPORT_SUBDIR)),
                })
            })
            .collect();
        ui.message(
            &serde_json::to_string_pretty(&serde_json::Value::Array(entries))
                .unwrap_or_else(|_| "[]".to_string()),
        );
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let versions = if self.args.deep {
            deep_scan(&[self.settings.install_root.as_path()])
        } else {
            match list_installed(
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
            }
        };

        if self.args.json {
            self.print_json(ui, &versions);
            return Ok(CommandResult::success());
        }

        if versions.is_empty() {
            ui.warning(&format!(
                "No installations found under {}",
                self.settings.install_root.display()
            ));
            return Ok(CommandResult::success());
        }

        ui.message(&format!(
            "Installed versions under {}:",
            self.settings.install_root.display()
        ));
        for v in &versions {
            let runtimes = supported_runtimes(&v.install_path.join(SUPPORT_SUBDIR));
            let marker = if v.name == self.settings.default_version {
                " (default)"
            } else {
                ""
            };
            if runtimes.is_empty() {
                ui.message(&format!("  {}{}", v.name, marker));
            } else {
                ui.message(&format!(
                    "  {}{}  runtimes: {}",
                    v.name,
                    marker,
                    runtimes.join(", ")
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
