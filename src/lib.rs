//! Pflaunch - DIgSILENT PowerFactory launch automation.
//!
//! Pflaunch is a CLI tool that replaces a grab-bag of ad-hoc launch and
//! study scripts: it scans the installation root for usable PowerFactory
//! versions, checks the host Python runtime against the release's bundled
//! support modules, applies a license profile to the current user after
//! probing the license server, and starts the picked version detached.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file and saved launch preferences
//! - [`discovery`] - Installed-version scanning and path resolution
//! - [`error`] - Error types and result aliases
//! - [`launcher`] - Detached process launch
//! - [`license`] - License profiles and host reachability probing
//! - [`session`] - Seam to the vendor automation API
//! - [`study`] - Scripted study plans (load flow, sweeps, exports)
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```no_run
//! use pflaunch::config::Settings;
//! use pflaunch::discovery::{list_installed, resolve, RuntimeVersion};
//!
//! let settings = Settings::default();
//! let installed = list_installed(
//!     &settings.install_root,
//!     &settings.version_pattern,
//!     settings.min_year,
//! )?;
//! let runtime = RuntimeVersion::new("3.8");
//! let paths = resolve(
//!     None,
//!     &installed,
//!     &runtime,
//!     &settings.default_version,
//!     &settings.denied_runtimes,
//! )?;
//! println!("{}", paths.install_path.display());
//! # Ok::<(), pflaunch::PflaunchError>(())
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod launcher;
pub mod license;
pub mod session;
pub mod study;
pub mod ui;

pub use error::{PflaunchError, Result};
