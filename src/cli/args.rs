//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// exoatlas - local data utilities for exoplanet population analysis.
#[derive(Debug, Parser)]
#[command(name = "exoatlas")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base data directory (overrides EXOATLAS_DATA)
    #[arg(short, long, global = true, env = "EXOATLAS_DATA")]
    pub data_dir: Option<PathBuf>,

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

    /// Never prompt; decline every confirmation
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved data directories
    Paths(PathsArgs),

    /// Wipe and recreate the local data directory
    Reset(ResetArgs),

    /// Report a file's age and whether it is stale
    Check(CheckArgs),

    /// Download a URL into the data directory, refreshing stale copies
    Fetch(FetchArgs),

    /// Render a histogram summary of a population file
    Summarize(SummarizeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `paths` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PathsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResetArgs {
    /// Don't prompt for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// File to check
    pub file: PathBuf,

    /// Maximum acceptable age, in days
    #[arg(long, default_value_t = 1.0)]
    pub max_age_days: f64,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FetchArgs {
    /// URL to download
    pub url: String,

    /// Maximum acceptable age of a cached copy, in days
    #[arg(long, default_value_t = 1.0)]
    pub max_age_days: f64,

    /// Re-download even if the cached copy is fresh
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `summarize` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SummarizeArgs {
    /// Population file (JSON)
    pub population: PathBuf,

    /// Columns to summarize (comma-separated; default: all columns)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Output SVG path (default: <population>.svg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
