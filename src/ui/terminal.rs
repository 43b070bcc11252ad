//! Interactive terminal UI.

use std::time::Duration;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI for interactive terminal sessions.
pub struct TerminalUI {
    mode: OutputMode,
    theme: ColorfulTheme,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: ColorfulTheme::default(),
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{msg}");
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{} {}", style("✓").green().bold(), msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{} {}", style("!").yellow().bold(), msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| anyhow::anyhow!("selection cancelled: {e}"))?;
        Ok(choice)
    }

    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        let choices = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact()
            .map_err(|e| anyhow::anyhow!("selection cancelled: {e}"))?;
        Ok(choices)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| anyhow::anyhow!("confirmation cancelled: {e}"))?;
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Box::new(TerminalSpinner { bar })
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Spinner backed by an indicatif progress bar.
struct TerminalSpinner {
    bar: ProgressBar,
}

impl SpinnerHandle for TerminalSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.bar
            .finish_with_message(format!("{} {}", style("✓").green(), msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar
            .finish_with_message(format!("{} {}", style("✗").red(), msg));
    }
}
