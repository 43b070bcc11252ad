//! Deep installation scan.
//!
//! Fallback for non-standard installations: instead of trusting the
//! directory naming convention, walk a set of roots looking for the
//! application executable itself. Slower than [`super::list_installed`],
//! so only run on request (`pflaunch list --deep`).

use std::path::Path;

use walkdir::WalkDir;

use super::versions::{extract_year, InstalledVersion};
use super::PF_EXECUTABLE;

/// Depth limit for the walk; vendor installs sit at most a few levels deep.
const MAX_DEPTH: usize = 4;

/// Walk `roots` for directories containing the application executable.
///
/// Returns whatever was found, sorted ascending by name; an empty result is
/// not an error here since the caller combines this with the pattern scan.
pub fn deep_scan(roots: &[&Path]) -> Vec<InstalledVersion> {
    let mut found = Vec::new();

    for root in roots {
        for entry in WalkDir::new(root)
            .max_depth(MAX_DEPTH)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() && entry.file_name() == PF_EXECUTABLE {
                let Some(install) = entry.path().parent() else {
                    continue;
                };
                let name = install
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                tracing::debug!("Deep scan hit: {}", install.display());
                found.push(InstalledVersion {
                    year: extract_year(&name).unwrap_or(0),
                    name,
                    install_path: install.to_path_buf(),
                });
            }
        }
    }

    found.sort_by(|a, b| a.name.cmp(&b.name));
    found.dedup_by(|a, b| a.install_path == b.install_path);
    found
}
