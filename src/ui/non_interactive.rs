//! Non-interactive UI for CI and headless use.
//!
//! Prompts are never shown: selects fall back to their defaults and
//! multi-selects to an empty choice, so callers must pass everything they
//! need as flags.

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Plain line-based UI with all prompts answered by defaults.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{msg}");
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {msg}");
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {msg}");
    }

    fn select(&mut self, _prompt: &str, _items: &[String], default: usize) -> Result<usize> {
        Ok(default)
    }

    fn multi_select(&mut self, _prompt: &str, _items: &[String]) -> Result<Vec<usize>> {
        Ok(Vec::new())
    }

    fn confirm(&mut self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode != OutputMode::Quiet {
            println!("{message}");
        }
        Box::new(LineSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner replacement that prints finish lines only.
struct LineSpinner;

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("error: {msg}");
    }
}
