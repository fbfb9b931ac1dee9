//! Paths command implementation.
//!
//! `exoatlas paths` shows the resolved data directory layout.

use crate::cli::args::PathsArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The paths command implementation.
pub struct PathsCommand {
    args: PathsArgs,
}

impl PathsCommand {
    /// Create a new paths command.
    pub fn new(args: PathsArgs) -> Self {
        Self { args }
    }
}

impl Command for PathsCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        if self.args.json {
            let registry: serde_json::Map<String, serde_json::Value> = ctx
                .dirs
                .registry()
                .into_iter()
                .map(|(name, path)| (name.to_string(), path.display().to_string().into()))
                .collect();
            let doc = serde_json::json!({
                "base": ctx.dirs.base().display().to_string(),
                "directories": registry,
            });
            ctx.output.result(&serde_json::to_string_pretty(&doc).map_err(anyhow::Error::from)?);
        } else {
            ctx.output.result(&format!("base: {}", ctx.dirs.base().display()));
            for (name, path) in ctx.dirs.registry() {
                ctx.output.result(&format!("{}: {}", name, path.display()));
            }
        }

        Ok(CommandResult::success())
    }
}
