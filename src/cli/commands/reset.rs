//! Reset command implementation.
//!
//! `exoatlas reset` wipes and recreates the local data directory after
//! confirmation. `--yes` answers the confirmation without prompting.

use crate::cli::args::ResetArgs;
use crate::error::Result;
use crate::ui::NonInteractivePolicy;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    args: ResetArgs,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(args: ResetArgs) -> Self {
        Self { args }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        let wiped = if self.args.yes {
            let mut always_yes = NonInteractivePolicy::assume_yes();
            ctx.dirs.reset_local_data(&mut always_yes)?
        } else {
            ctx.dirs.reset_local_data(ctx.policy)?
        };

        match wiped {
            Some(path) => {
                ctx.output
                    .println(&format!("Removed all local data from {}", path.display()));
                Ok(CommandResult::success())
            }
            None => {
                ctx.output.println("Nothing removed.");
                Ok(CommandResult::success())
            }
        }
    }
}
