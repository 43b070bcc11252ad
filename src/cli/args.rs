//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pflaunch - PowerFactory version resolution and launch automation.
#[derive(Debug, Parser)]
#[command(name = "pflaunch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides the default user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Installation root to scan (overrides config)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a version, apply a license profile and start it (default)
    #[command(disable_version_flag = true)]
    Launch(LaunchArgs),

    /// List installed PowerFactory versions
    List(ListArgs),

    /// Show resolved configuration and environment
    Status(StatusArgs),

    /// Run a study plan through the automation session
    Study(StudyArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `launch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LaunchArgs {
    /// Version directory name to launch (e.g. "PowerFactory 2020")
    #[arg(long, value_name = "NAME")]
    pub version: Option<String>,

    /// License module to enable (repeatable)
    #[arg(short, long = "feature", value_name = "KEY")]
    pub features: Vec<String>,

    /// Enable every known license module
    #[arg(long, conflicts_with = "features")]
    pub all_features: bool,

    /// Skip license profile application entirely
    #[arg(long)]
    pub no_license: bool,

    /// Skip the license host reachability probe
    #[arg(long)]
    pub skip_ping: bool,

    /// Host runtime version (e.g. "3.8"); probed when omitted
    #[arg(long, value_name = "VERSION")]
    pub runtime: Option<String>,

    /// Resolve and report without applying or launching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Walk the root recursively for stray installations
    #[arg(long)]
    pub deep: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Host runtime version (e.g. "3.8"); probed when omitted
    #[arg(long, value_name = "VERSION")]
    pub runtime: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `study` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StudyArgs {
    /// Path to the study plan YAML file
    pub plan: PathBuf,

    /// Print the plan without executing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
