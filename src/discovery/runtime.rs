//! Host runtime detection.
//!
//! Each PowerFactory release bundles automation-bridge support only for
//! specific Python minor versions, as `Python/<major.minor>` directories
//! under the installation. The support directory that gets loaded must
//! match the Python on the host, so the launcher needs that version before
//! it can resolve paths.
//!
//! Detection probes the usual interpreter names on PATH and extracts the
//! `major.minor` pair from `--version` output. Configuration or the
//! `--runtime` flag can pin the version instead, and tests construct
//! [`RuntimeVersion`] values directly.

use std::fmt;
use std::process::Command;

use regex::Regex;

use crate::error::{PflaunchError, Result};

/// Interpreter names probed in order.
const INTERPRETERS: &[&str] = &["python", "python3", "py"];

/// A `major.minor` host runtime version, e.g. `3.8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeVersion(String);

impl RuntimeVersion {
    /// Build from an explicit `major.minor` string (flag or config value).
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// The `major.minor` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Probe the interpreters on PATH for their version.
    ///
    /// Tries `python`, `python3`, then `py`; the first one that runs and
    /// reports a parseable version wins.
    pub fn detect() -> Result<Self> {
        for name in INTERPRETERS {
            let output = match Command::new(name).arg("--version").output() {
                Ok(o) if o.status.success() => o,
                _ => continue,
            };
            // Python 2 printed the version on stderr
            let text = format!(
                "{}{}",
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
            if let Some(version) = extract_major_minor(&text) {
                tracing::debug!("Detected runtime {} via '{} --version'", version, name);
                return Ok(Self(version));
            }
        }

        Err(PflaunchError::RuntimeProbeFailed {
            message: "no Python interpreter found on PATH".to_string(),
        })
    }

    /// Whether this runtime appears in the configured denylist.
    pub fn is_denied(&self, denylist: &[String]) -> bool {
        denylist.iter().any(|d| d == &self.0)
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract a `major.minor` pair from interpreter version output.
fn extract_major_minor(output: &str) -> Option<String> {
    let re = Regex::new(r"(\d+\.\d+)(?:\.\d+)?").expect("static regex");
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
