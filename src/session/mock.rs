//! Mock session for testing.
//!
//! `MockSession` implements [`Session`](super::Session) and captures every
//! call for later assertion. Individual operations can be scripted to fail,
//! which is how the no-rollback behavior of the license applier is tested.

use std::path::PathBuf;

use crate::error::{PflaunchError, Result};
use crate::study::{Calculation, ExportSettings};

use super::{Session, UserRecord};

/// Mock current-user record.
#[derive(Debug, Default)]
pub struct MockUser {
    name: String,
    flags: Vec<(String, bool)>,
    /// Field name that should fail on assignment, if any.
    fail_on: Option<String>,
}

impl UserRecord for MockUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_flag(&mut self, field: &str, enabled: bool) -> Result<()> {
        if self.fail_on.as_deref() == Some(field) {
            return Err(PflaunchError::SessionError {
                message: format!("assignment to '{field}' rejected"),
            });
        }
        self.flags.push((field.to_string(), enabled));
        Ok(())
    }
}

/// Mock session capturing all interactions.
#[derive(Debug, Default)]
pub struct MockSession {
    user: MockUser,
    user_requests: usize,
    projects: Vec<String>,
    study_cases: Vec<String>,
    executed: Vec<Calculation>,
    exports: Vec<(String, PathBuf)>,
    fail_on_execute: Option<Calculation>,
}

impl MockSession {
    pub fn new() -> Self {
        Self {
            user: MockUser {
                name: "TestUser".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Script the named user field to reject assignment.
    pub fn fail_flag(mut self, field: &str) -> Self {
        self.user.fail_on = Some(field.to_string());
        self
    }

    /// Script a calculation to fail when executed.
    pub fn fail_execute(mut self, calc: Calculation) -> Self {
        self.fail_on_execute = Some(calc);
        self
    }

    /// How many times the current-user record was requested.
    pub fn user_requests(&self) -> usize {
        self.user_requests
    }

    /// Flag assignments that reached the user record, in order.
    pub fn flags(&self) -> &[(String, bool)] {
        &self.user.flags
    }

    /// Projects activated, in order.
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// Study cases activated, in order.
    pub fn study_cases(&self) -> &[String] {
        &self.study_cases
    }

    /// Calculations executed, in order.
    pub fn executed(&self) -> &[Calculation] {
        &self.executed
    }

    /// Exports performed as (result object, target path).
    pub fn exports(&self) -> &[(String, PathBuf)] {
        &self.exports
    }

    /// True when nothing in the external application was touched.
    pub fn untouched(&self) -> bool {
        self.user_requests == 0
            && self.projects.is_empty()
            && self.study_cases.is_empty()
            && self.executed.is_empty()
            && self.exports.is_empty()
    }
}

impl Session for MockSession {
    fn current_user(&mut self) -> Result<&mut dyn UserRecord> {
        self.user_requests += 1;
        Ok(&mut self.user)
    }

    fn activate_project(&mut self, name: &str) -> Result<()> {
        self.projects.push(name.to_string());
        Ok(())
    }

    fn activate_study_case(&mut self, name: &str) -> Result<()> {
        self.study_cases.push(name.to_string());
        Ok(())
    }

    fn execute(&mut self, calc: Calculation) -> Result<()> {
        if self.fail_on_execute == Some(calc) {
            return Err(PflaunchError::SessionError {
                message: format!("{} did not converge", calc.object_class()),
            });
        }
        self.executed.push(calc);
        Ok(())
    }

    fn export_results(&mut self, settings: &ExportSettings) -> Result<()> {
        self.exports
            .push((settings.result_object.clone(), settings.target.clone()));
        Ok(())
    }
}
