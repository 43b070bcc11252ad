//! Launching the application executable.
//!
//! Fire-and-forget: the executable is spawned detached from the resolved
//! installation directory, output is not captured and the child is never
//! waited on. The only failure modes are a missing executable and a spawn
//! error.

use std::process::{Command, Stdio};

use crate::error::{PflaunchError, Result};

use crate::discovery::{ResolvedPaths, PF_EXECUTABLE};
use crate::session::SessionEnv;

/// Spawn the application from the resolved installation as a detached child.
///
/// The child gets the bridge environment (installation directory appended
/// to `PATH`) so its own library resolution works. Returns the child's pid.
pub fn launch(paths: &ResolvedPaths) -> Result<u32> {
    let executable = paths.install_path.join(PF_EXECUTABLE);
    if !executable.is_file() {
        return Err(PflaunchError::ExecutableMissing { path: executable });
    }

    let env = SessionEnv::from_paths(paths);
    let child = Command::new(&executable)
        .current_dir(&paths.install_path)
        .env("PATH", &env.path_var)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| PflaunchError::LaunchFailed {
            path: executable.clone(),
            message: e.to_string(),
        })?;

    let pid = child.id();
    tracing::info!("Launched {} (pid {})", executable.display(), pid);
    Ok(pid)
}
