//! Discovery of installed PowerFactory versions and path resolution.
//!
//! The linear startup sequence is: scan the installation root for version
//! directories ([`versions`]), pick one and derive the install/support path
//! pair ([`resolver`]), checking the host runtime against the selected
//! version's bundled support directories ([`runtime`]).

pub mod deep;
pub mod resolver;
pub mod runtime;
pub mod versions;

pub use deep::deep_scan;
pub use resolver::{resolve, ResolvedPaths};
pub use runtime::RuntimeVersion;
pub use versions::{list_installed, InstalledVersion};

/// File name of the application executable inside an installation directory.
pub const PF_EXECUTABLE: &str = "PowerFactory.exe";

/// Subdirectory of an installation that holds per-runtime support bundles.
pub const SUPPORT_SUBDIR: &str = "Python";
