//! Command implementations.

pub mod completions;
pub mod dispatcher;
pub mod launch;
pub mod list;
pub mod status;
pub mod study;
