// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cg - Conventional commit grouping assistant
///
/// Inspects the working tree and suggests how to split pending changes
/// into well-scoped conventional commits.
#[derive(Parser, Debug)]
#[command(name = "cg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Suggest conventional commit groupings for pending changes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to analyze if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose diagnostic logging
    #[arg(short, long, global = true, visible_alias = "debug")]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Read `git status --porcelain` lines from stdin instead of running git
    #[arg(long, global = true)]
    pub stdin: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text report (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze pending changes and suggest commit groups (default command)
    Analyze,

    /// Write an example cg.toml to the current directory
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Analyze if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Analyze)
    }

    /// Get the effective output format.
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Text)
    }
}
