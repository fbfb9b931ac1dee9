//! Command-line interface for exoatlas.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, CompletionsArgs, FetchArgs, PathsArgs, ResetArgs, SummarizeArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
