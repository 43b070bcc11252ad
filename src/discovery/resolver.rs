//! Path resolution for a selected version.
//!
//! Given the scanned versions and a host runtime, derives the read-only
//! install/support path pair the rest of the tool works with. Selection and
//! compatibility rules:
//!
//! 1. No explicit selection: prefer the configured default version if it is
//!    installed, otherwise the lexicographically last entry.
//! 2. An explicit selection must be installed, or resolution fails.
//! 3. The runtime must not be denylisted and its support directory
//!    (`<install>/Python/<major.minor>`) must exist on disk. The denylist is
//!    checked first: a known-broken runtime is rejected even when the
//!    bundled directory is present.

use std::path::PathBuf;

use crate::error::{PflaunchError, Result};

use super::runtime::RuntimeVersion;
use super::versions::InstalledVersion;
use super::SUPPORT_SUBDIR;

/// The resolved install/support path pair. Read-only after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Display name of the resolved version.
    pub version: String,
    /// Installation directory.
    pub install_path: PathBuf,
    /// Runtime support directory bundled with this release.
    pub support_path: PathBuf,
}

/// Resolve the installation and support paths for `selected`.
///
/// `installed` must be non-empty (the locator guarantees this on success).
pub fn resolve(
    selected: Option<&str>,
    installed: &[InstalledVersion],
    runtime: &RuntimeVersion,
    default_version: &str,
    denied_runtimes: &[String],
) -> Result<ResolvedPaths> {
    let chosen = match selected {
        Some(name) => installed
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| PflaunchError::InvalidVersion {
                requested: name.to_string(),
                available: installed.iter().map(|v| v.name.clone()).collect(),
            })?,
        None => installed
            .iter()
            .find(|v| v.name == default_version)
            .or_else(|| installed.last())
            .ok_or_else(|| PflaunchError::NoVersionsFound {
                root: PathBuf::new(),
                pattern: String::new(),
            })?,
    };

    tracing::debug!("PowerFactory version '{}' will be used", chosen.name);

    let support_root = chosen.install_path.join(SUPPORT_SUBDIR);
    let support_path = support_root.join(runtime.as_str());

    if runtime.is_denied(denied_runtimes) || !support_path.is_dir() {
        return Err(PflaunchError::IncompatibleRuntime {
            runtime: runtime.as_str().to_string(),
            version: chosen.name.clone(),
            supported: supported_runtimes(&support_root),
        });
    }

    Ok(ResolvedPaths {
        version: chosen.name.clone(),
        install_path: chosen.install_path.clone(),
        support_path,
    })
}

/// List the runtime support directories a release actually bundles.
///
/// Used for error messages; an unreadable support root yields an empty list.
pub fn supported_runtimes(support_root: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(support_root)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_dir())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
