//! Saved launch preferences.
//!
//! Remembers the last selected version and license profile so repeat
//! launches can default to them. Persistence is best-effort: a failed save
//! is logged and never fails the launch.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PflaunchError, Result};

/// Last-used launch choices.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    /// Version name picked on the last run.
    #[serde(default)]
    pub last_version: Option<String>,

    /// Feature keys enabled on the last run.
    #[serde(default)]
    pub last_features: Vec<String>,

    /// When the last launch happened.
    #[serde(default)]
    pub last_launch: Option<DateTime<Utc>>,
}

impl Preferences {
    /// Preferences file under the user data dir.
    pub fn file_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("pflaunch").join("preferences.yml"))
    }

    /// Load saved preferences; missing file or missing data dir yields defaults.
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        if !path.is_file() {
            return Self::default();
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed preferences at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Could not read preferences at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save preferences using the write-to-temp-then-rename pattern.
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::file_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    /// Save to an explicit path (tests use a temp dir).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            serde_yaml::to_string(self).map_err(|e| PflaunchError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let temp_path = path.with_extension("yml.tmp");
        std::fs::write(&temp_path, &content)?;
        std::fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Record the choices of a successful launch.
    pub fn record_launch(&mut self, version: &str, features: &[&str]) {
        self.last_version = Some(version.to_string());
        self.last_features = features.iter().map(|f| f.to_string()).collect();
        self.last_launch = Some(Utc::now());
    }
}
