//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`exoatlas paths`, `exoatlas reset`)
//! - Shared directory bootstrap and confirmation policy
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod fetch;
pub mod paths;
pub mod reset;
pub mod summarize;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
