//! Command-line interface.
//!
//! Argument parsing lives in [`args`], command implementations under
//! [`commands`].

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
