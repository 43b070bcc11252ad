//! Configuration loading and saved preferences.

pub mod preferences;
pub mod settings;

pub use preferences::Preferences;
pub use settings::Settings;
