//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Prompt answers can be pre-configured
//! per prompt text.

use std::collections::HashMap;

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI capturing all interactions.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    prompts_shown: Vec<String>,
    select_responses: HashMap<String, usize>,
    multi_select_responses: HashMap<String, Vec<usize>>,
    confirm_responses: HashMap<String, bool>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the mock behave as an interactive terminal.
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Pre-configure the answer for a select prompt.
    pub fn set_select_response(&mut self, prompt: &str, index: usize) {
        self.select_responses.insert(prompt.to_string(), index);
    }

    /// Pre-configure the answer for a multi-select prompt.
    pub fn set_multi_select_response(&mut self, prompt: &str, indices: Vec<usize>) {
        self.multi_select_responses
            .insert(prompt.to_string(), indices);
    }

    /// Pre-configure the answer for a confirmation.
    pub fn set_confirm_response(&mut self, prompt: &str, answer: bool) {
        self.confirm_responses.insert(prompt.to_string(), answer);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        self.prompts_shown.push(prompt.to_string());
        let index = self.select_responses.get(prompt).copied().unwrap_or(default);
        debug_assert!(index < items.len().max(1));
        Ok(index)
    }

    fn multi_select(&mut self, prompt: &str, _items: &[String]) -> Result<Vec<usize>> {
        self.prompts_shown.push(prompt.to_string());
        Ok(self
            .multi_select_responses
            .get(prompt)
            .cloned()
            .unwrap_or_default())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        self.prompts_shown.push(prompt.to_string());
        Ok(self.confirm_responses.get(prompt).copied().unwrap_or(default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that swallows everything.
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}
