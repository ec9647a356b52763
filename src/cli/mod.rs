// ABOUTME: CLI argument parsing and command routing for gh-pair
//
// Provides command-line interface for:
// - Managing active pairs without the TUI (add, remove, list, clear)
// - Installing and removing the commit-msg hook (init, uninstall)
// - Launching the TUI (tui, default)

pub mod add;
pub mod hook;
pub mod list;
pub mod remove;
pub mod util;

use clap::{Parser, Subcommand, ValueEnum};

/// Pair-programming co-authors for your commits
#[derive(Parser)]
#[command(name = "gh-pair")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Add pairs by GitHub handle
    Add(AddArgs),

    /// Remove pairs by GitHub handle
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// List active pairs
    #[command(alias = "ls")]
    List,

    /// Remove every active pair
    Clear,

    /// Install the commit-msg hook in this repository
    Init,

    /// Remove the commit-msg hook from this repository
    Uninstall,
}

/// Arguments for the add command
#[derive(clap::Args)]
pub struct AddArgs {
    /// GitHub handles, with or without a leading @
    #[arg(required = true)]
    pub handles: Vec<String>,
}

/// Arguments for the remove command
#[derive(clap::Args)]
pub struct RemoveArgs {
    /// GitHub handles of the pairs to remove
    #[arg(required = true)]
    pub handles: Vec<String>,
}
