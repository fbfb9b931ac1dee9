//! Check command implementation.
//!
//! `exoatlas check <file>` reports how old a file is and whether it counts
//! as stale for the given maximum age.

use chrono::{DateTime, Local};

use crate::cache::age_in_days;
use crate::cli::args::CheckArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        let path = &self.args.file;
        let age = age_in_days(path)?;

        if age.is_infinite() {
            ctx.output
                .result(&format!("{}: not found (infinitely stale)", path.display()));
            return Ok(CommandResult::failure(1));
        }

        let stale = age > self.args.max_age_days;
        ctx.output.result(&format!(
            "{}: {:.3} days old ({})",
            path.display(),
            age,
            if stale { "stale" } else { "fresh" }
        ));

        if let Ok(metadata) = std::fs::metadata(path) {
            if let Ok(modified) = metadata.modified() {
                let local: DateTime<Local> = modified.into();
                ctx.output.detail(&format!(
                    "last modified {}",
                    local.format("%Y-%m-%d %H:%M:%S")
                ));
            }
        }

        if stale {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
