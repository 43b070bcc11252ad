//! Error types for pflaunch operations.
//!
//! This module defines [`PflaunchError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PflaunchError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PflaunchError::Other`) for unexpected errors
//! - Every error is terminal to the current operation; nothing is retried
//! - Messages list the valid alternatives (installed versions, supported
//!   runtimes, known feature keys) so a human can correct configuration

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pflaunch operations.
#[derive(Debug, Error)]
pub enum PflaunchError {
    /// No installed versions matched the search pattern.
    #[error("No PowerFactory installations matching '{pattern}' found under {root}")]
    NoVersionsFound { root: PathBuf, pattern: String },

    /// A requested version is not among the installed ones.
    #[error("PowerFactory version '{requested}' is not installed; available versions: {}", available.join(", "))]
    InvalidVersion {
        requested: String,
        available: Vec<String>,
    },

    /// The host runtime cannot drive the selected version's automation bridge.
    #[error("Python runtime {runtime} is not usable with {version}; supported runtimes: {}", if supported.is_empty() { "none found".to_string() } else { supported.join(", ") })]
    IncompatibleRuntime {
        runtime: String,
        version: String,
        supported: Vec<String>,
    },

    /// The host runtime version could not be determined.
    #[error("Could not determine the host Python version: {message} (pass --runtime X.Y to override)")]
    RuntimeProbeFailed { message: String },

    /// The license host did not answer the reachability probe.
    #[error("License host '{host}' is unreachable; check the VPN connection")]
    HostUnreachable { host: String },

    /// The application executable is missing from the resolved directory.
    #[error("Executable not found: {path}")]
    ExecutableMissing { path: PathBuf },

    /// Spawning the application failed.
    #[error("Failed to launch {path}: {message}")]
    LaunchFailed { path: PathBuf, message: String },

    /// A license profile referenced a feature key outside the known table.
    #[error("Unknown license feature '{key}'; valid features: {}", valid.join(", "))]
    UnknownFeature { key: String, valid: Vec<String> },

    /// The automation session rejected an operation.
    #[error("PowerFactory session error: {message}")]
    SessionError { message: String },

    /// Failed to parse a configuration or study plan file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pflaunch operations.
pub type Result<T> = std::result::Result<T, PflaunchError>;
