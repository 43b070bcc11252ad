//! Installed-version scanning.
//!
//! A PowerFactory release installs into a directory named after the product
//! and release year, e.g. `PowerFactory 2018 SP5` or `PowerFactory 2020`.
//! The locator runs a single filesystem pass over the installation root,
//! keeps directories whose name matches the configured wildcard pattern,
//! parses the year token, and drops releases older than the minimum the
//! tool has been tested against.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{PflaunchError, Result};

/// One installed PowerFactory version, immutable after the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledVersion {
    /// Directory name, e.g. `PowerFactory 2018 SP5`.
    pub name: String,
    /// Release year parsed from the name.
    pub year: u32,
    /// Absolute installation directory.
    pub install_path: PathBuf,
}

/// Scan `root` for installations matching the wildcard `pattern`.
///
/// Entries whose year is below `min_year` are excluded; results are sorted
/// ascending by name. Fails with [`PflaunchError::NoVersionsFound`] when
/// nothing matches; the caller decides whether that is fatal.
pub fn list_installed(root: &Path, pattern: &str, min_year: u32) -> Result<Vec<InstalledVersion>> {
    let matcher = pattern_to_regex(pattern);
    let mut found = Vec::new();

    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        // A missing root is the same situation as an empty one
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PflaunchError::NoVersionsFound {
                root: root.to_path_buf(),
                pattern: pattern.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !matcher.is_match(&name) {
            continue;
        }
        let Some(year) = extract_year(&name) else {
            tracing::debug!("Skipping '{}': no numeric year token", name);
            continue;
        };
        if year < min_year {
            tracing::debug!("Skipping '{}': release year {} < {}", name, year, min_year);
            continue;
        }
        found.push(InstalledVersion {
            name,
            year,
            install_path: entry.path(),
        });
    }

    if found.is_empty() {
        return Err(PflaunchError::NoVersionsFound {
            root: root.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    found.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(found)
}

/// Extract the first numeric run in a version name as the release year.
pub fn extract_year(name: &str) -> Option<u32> {
    let re = Regex::new(r"\d+").expect("static regex");
    re.find(name).and_then(|m| m.as_str().parse().ok())
}

/// Compile a glob-style pattern (`*`, `?`) into an anchored regex.
fn pattern_to_regex(pattern: &str) -> Regex {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            other => expr.push_str(&regex::escape(&other.to_string())),
        }
    }
    expr.push('$');
    Regex::new(&expr).expect("escaped pattern is always a valid regex")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_root(names: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in names {
            fs::create_dir(temp.path().join(name)).unwrap();
        }
        temp
    }

    #[test]
    fn lists_matching_versions_sorted_ascending() {
        let root = setup_root(&[
            "PowerFactory 2020",
            "PowerFactory 2018 SP5",
            "PowerFactory 2019",
        ]);

        let versions = list_installed(root.path(), "PowerFactory 20*", 2017).unwrap();

        let names: Vec<_> = versions.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "PowerFactory 2018 SP5",
                "PowerFactory 2019",
                "PowerFactory 2020"
            ]
        );
    }

    #[test]
    fn excludes_versions_below_minimum_year() {
        let root = setup_root(&[
            "PowerFactory 2016 SP5",
            "PowerFactory 2017",
            "PowerFactory 2018 SP5",
            "PowerFactory 2020",
        ]);

        let versions = list_installed(root.path(), "PowerFactory 20*", 2017).unwrap();

        assert!(versions.iter().all(|v| v.year >= 2017));
        assert_eq!(versions.len(), 3);
    }

    #[test]
    fn ignores_non_matching_entries() {
        let root = setup_root(&["PowerFactory 2020", "DIgSILENT GridCode", "Sincal 16"]);

        let versions = list_installed(root.path(), "PowerFactory 20*", 2017).unwrap();

        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].name, "PowerFactory 2020");
    }

    #[test]
    fn ignores_plain_files() {
        let root = setup_root(&["PowerFactory 2020"]);
        fs::write(root.path().join("PowerFactory 2021"), "not a directory").unwrap();

        let versions = list_installed(root.path(), "PowerFactory 20*", 2017).unwrap();

        assert_eq!(versions.len(), 1);
    }

    #[test]
    fn empty_root_is_not_found() {
        let root = TempDir::new().unwrap();

        let err = list_installed(root.path(), "PowerFactory 20*", 2017).unwrap_err();

        assert!(matches!(err, PflaunchError::NoVersionsFound { .. }));
    }

    #[test]
    fn missing_root_is_not_found() {
        let err = list_installed(
            Path::new("/nonexistent/DIgSILENT"),
            "PowerFactory 20*",
            2017,
        )
        .unwrap_err();

        assert!(matches!(err, PflaunchError::NoVersionsFound { .. }));
    }

    #[test]
    fn year_is_parsed_from_display_name() {
        let root = setup_root(&["PowerFactory 2018 SP5"]);

        let versions = list_installed(root.path(), "PowerFactory 20*", 2017).unwrap();

        assert_eq!(versions[0].year, 2018);
        assert_eq!(versions[0].install_path, root.path().join("PowerFactory 2018 SP5"));
    }

    #[test]
    fn extract_year_takes_first_numeric_run() {
        assert_eq!(extract_year("PowerFactory 2018 SP5"), Some(2018));
        assert_eq!(extract_year("PowerFactory 2020"), Some(2020));
        assert_eq!(extract_year("PowerFactory"), None);
    }

    #[test]
    fn pattern_wildcards_match_as_glob() {
        let re = pattern_to_regex("PowerFactory 20*");
        assert!(re.is_match("PowerFactory 2020"));
        assert!(re.is_match("PowerFactory 2018 SP5"));
        assert!(!re.is_match("PowerFactory 1999"));
        assert!(!re.is_match("Other PowerFactory 2020"));
    }

    #[test]
    fn pattern_escapes_regex_metacharacters() {
        let re = pattern_to_regex("App (x64) 1?");
        assert!(re.is_match("App (x64) 12"));
        assert!(!re.is_match("App x64 12"));
    }
}
