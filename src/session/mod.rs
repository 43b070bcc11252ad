//! Seam to the PowerFactory automation API.
//!
//! The vendor's object model is a closed-source collaborator; this module
//! defines the narrow trait surface the rest of the tool sequences calls
//! through, plus [`DryRunSession`], which records the operations instead of
//! performing them. The dry-run implementation backs `--dry-run` and is
//! also what the binary falls back to on hosts where no vendor bridge is
//! available. Tests use [`MockSession`](mock::MockSession).
//!
//! There is no transactional rollback anywhere in this surface: a failure
//! mid-sequence leaves whatever state the external application already
//! accepted, matching its own behavior.

pub mod mock;

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::Result;
use crate::study::{Calculation, ExportSettings};

use crate::discovery::ResolvedPaths;

/// The application's current-user record.
///
/// License toggles live as boolean fields on this record; the application
/// itself persists any change.
pub trait UserRecord {
    /// User login name (`loc_name` in the external object model).
    fn name(&self) -> &str;

    /// Assign a boolean license field.
    fn set_flag(&mut self, field: &str, enabled: bool) -> Result<()>;
}

/// A connected automation session.
pub trait Session {
    /// The current-user record.
    fn current_user(&mut self) -> Result<&mut dyn UserRecord>;

    /// Activate a project by name.
    fn activate_project(&mut self, name: &str) -> Result<()>;

    /// Activate a study case inside the active project.
    fn activate_study_case(&mut self, name: &str) -> Result<()>;

    /// Execute a pre-built calculation object of the active study case.
    fn execute(&mut self, calc: Calculation) -> Result<()>;

    /// Export the active result object per `settings`.
    fn export_results(&mut self, settings: &ExportSettings) -> Result<()>;
}

/// Environment the automation bridge needs to load.
///
/// The bridge resolves its native libraries from the installation directory
/// and its runtime support modules from the matching support directory, so
/// both must be visible before a session is opened.
#[derive(Debug, Clone)]
pub struct SessionEnv {
    /// Directories prepended to the module search path.
    pub search_paths: Vec<PathBuf>,
    /// `PATH` value with the installation directory appended.
    pub path_var: OsString,
}

impl SessionEnv {
    /// Derive the bridge environment from resolved paths.
    pub fn from_paths(paths: &ResolvedPaths) -> Self {
        let current = std::env::var_os("PATH").unwrap_or_default();
        let mut entries: Vec<PathBuf> = std::env::split_paths(&current).collect();
        entries.push(paths.install_path.clone());
        let path_var = std::env::join_paths(entries)
            .unwrap_or_else(|_| paths.install_path.clone().into_os_string());

        Self {
            search_paths: vec![paths.install_path.clone(), paths.support_path.clone()],
            path_var,
        }
    }
}

/// A session that records operations instead of performing them.
///
/// Every call is logged at info level and appended to an operation list the
/// caller can print or assert on.
#[derive(Debug, Default)]
pub struct DryRunSession {
    user: DryRunUser,
    operations: Vec<String>,
}

#[derive(Debug)]
struct DryRunUser {
    name: String,
    flags: Vec<(String, bool)>,
}

impl Default for DryRunUser {
    fn default() -> Self {
        Self {
            name: "current-user".to_string(),
            flags: Vec::new(),
        }
    }
}

impl UserRecord for DryRunUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_flag(&mut self, field: &str, enabled: bool) -> Result<()> {
        tracing::info!("dry-run: user.{} = {}", field, enabled as u8);
        self.flags.push((field.to_string(), enabled));
        Ok(())
    }
}

impl DryRunSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded flag assignments.
    pub fn flag_assignments(&self) -> &[(String, bool)] {
        &self.user.flags
    }

    /// The recorded study operations, in order.
    pub fn operations(&self) -> &[String] {
        &self.operations
    }
}

impl Session for DryRunSession {
    fn current_user(&mut self) -> Result<&mut dyn UserRecord> {
        Ok(&mut self.user)
    }

    fn activate_project(&mut self, name: &str) -> Result<()> {
        tracing::info!("dry-run: activate project '{}'", name);
        self.operations.push(format!("activate-project {name}"));
        Ok(())
    }

    fn activate_study_case(&mut self, name: &str) -> Result<()> {
        tracing::info!("dry-run: activate study case '{}'", name);
        self.operations.push(format!("activate-case {name}"));
        Ok(())
    }

    fn execute(&mut self, calc: Calculation) -> Result<()> {
        tracing::info!("dry-run: execute {}", calc.object_class());
        self.operations.push(format!("execute {}", calc.object_class()));
        Ok(())
    }

    fn export_results(&mut self, settings: &ExportSettings) -> Result<()> {
        tracing::info!(
            "dry-run: export '{}' to {} ({})",
            settings.result_object,
            settings.target.display(),
            settings.format
        );
        self.operations
            .push(format!("export {}", settings.target.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::ExportFormat;

    #[test]
    fn session_env_includes_install_and_support_paths() {
        let paths = ResolvedPaths {
            version: "PowerFactory 2020".into(),
            install_path: PathBuf::from("/opt/pf/PowerFactory 2020"),
            support_path: PathBuf::from("/opt/pf/PowerFactory 2020/Python/3.8"),
        };

        let env = SessionEnv::from_paths(&paths);

        assert_eq!(env.search_paths[0], paths.install_path);
        assert_eq!(env.search_paths[1], paths.support_path);
        let path = env.path_var.to_string_lossy().to_string();
        assert!(path.contains("PowerFactory 2020"));
    }

    #[test]
    fn dry_run_records_flags_and_operations() {
        let mut session = DryRunSession::new();

        session
            .current_user()
            .unwrap()
            .set_flag("harm", true)
            .unwrap();
        session.activate_project("Test1").unwrap();
        session.execute(Calculation::LoadFlow).unwrap();
        session
            .export_results(&ExportSettings {
                result_object: "Results".into(),
                target: PathBuf::from("/tmp/out.csv"),
                format: ExportFormat::Csv,
            })
            .unwrap();

        assert_eq!(
            session.flag_assignments(),
            &[("harm".to_string(), true)]
        );
        assert_eq!(
            session.operations(),
            &[
                "activate-project Test1".to_string(),
                "execute ComLdf".to_string(),
                "export /tmp/out.csv".to_string(),
            ]
        );
    }
}
