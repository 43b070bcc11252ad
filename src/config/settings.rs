//! Tool settings.
//!
//! Every knob has a built-in default matching the standard corporate
//! install, so the tool works with no config file at all. Lookup order:
//! `--config PATH`, then `<config dir>/pflaunch/config.yml`, then the
//! defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PflaunchError, Result};

/// Default installation root on the standard corporate image.
pub const DEFAULT_INSTALL_ROOT: &str = r"C:\Program Files\DIgSILENT";

/// Default directory-name pattern for installed versions.
pub const DEFAULT_VERSION_PATTERN: &str = "PowerFactory 20*";

/// Oldest release year this tool has been tested against.
pub const DEFAULT_MIN_YEAR: u32 = 2017;

/// Version preferred when none is selected.
pub const DEFAULT_VERSION: &str = "PowerFactory 2020";

/// License server hostname behind the VPN.
pub const DEFAULT_LICENSE_HOST: &str = "digsilent2";

/// Tool settings, deserialized from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Root directory scanned for installed versions.
    pub install_root: PathBuf,
    /// Wildcard pattern version directories must match.
    pub version_pattern: String,
    /// Releases older than this year are ignored.
    pub min_year: u32,
    /// Version used when none is selected.
    pub default_version: String,
    /// License server hostname probed before applying a profile.
    pub license_host: String,
    /// Runtime versions known to break the automation bridge.
    pub denied_runtimes: Vec<String>,
    /// Pinned host runtime version; probed when unset.
    pub runtime: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            install_root: PathBuf::from(DEFAULT_INSTALL_ROOT),
            version_pattern: DEFAULT_VERSION_PATTERN.to_string(),
            min_year: DEFAULT_MIN_YEAR,
            default_version: DEFAULT_VERSION.to_string(),
            license_host: DEFAULT_LICENSE_HOST.to_string(),
            denied_runtimes: vec!["3.5".to_string()],
            runtime: None,
        }
    }
}

impl Settings {
    /// Default config file location under the user config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pflaunch").join("config.yml"))
    }

    /// Load settings from `explicit` when given, from the default location
    /// when it exists, otherwise the built-in defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a settings file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| PflaunchError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
