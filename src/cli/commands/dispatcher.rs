//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandContext`] bundling the shared pieces every command needs
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::storage::DataDirectories;
use crate::ui::{ConfirmPolicy, Output};

/// Shared state handed to every command.
pub struct CommandContext<'a> {
    /// Resolved data directory layout (already bootstrapped).
    pub dirs: &'a DataDirectories,
    /// Mode-aware output writer.
    pub output: &'a Output,
    /// Confirmation policy for destructive or blocking decisions.
    pub policy: &'a mut dyn ConfirmPolicy,
}

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against the shared context.
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    dirs: DataDirectories,
}

impl CommandDispatcher {
    /// Create a new dispatcher over a resolved directory layout.
    pub fn new(dirs: DataDirectories) -> Self {
        Self { dirs }
    }

    /// The directory layout commands run against.
    pub fn dirs(&self) -> &DataDirectories {
        &self.dirs
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(
        &self,
        cli: &Cli,
        output: &Output,
        policy: &mut dyn ConfirmPolicy,
    ) -> Result<CommandResult> {
        let mut ctx = CommandContext {
            dirs: &self.dirs,
            output,
            policy,
        };

        match &cli.command {
            Commands::Paths(args) => {
                super::paths::PathsCommand::new(args.clone()).execute(&mut ctx)
            }
            Commands::Reset(args) => {
                super::reset::ResetCommand::new(args.clone()).execute(&mut ctx)
            }
            Commands::Check(args) => {
                super::check::CheckCommand::new(args.clone()).execute(&mut ctx)
            }
            Commands::Fetch(args) => {
                super::fetch::FetchCommand::new(args.clone()).execute(&mut ctx)
            }
            Commands::Summarize(args) => {
                super::summarize::SummarizeCommand::new(args.clone()).execute(&mut ctx)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(&mut ctx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_keeps_its_directories() {
        let dirs = DataDirectories::from_base("/tmp/atlas");
        let dispatcher = CommandDispatcher::new(dirs.clone());
        assert_eq!(dispatcher.dirs(), &dirs);
    }
}
