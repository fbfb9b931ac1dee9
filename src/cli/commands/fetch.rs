//! Fetch command implementation.
//!
//! `exoatlas fetch <url>` downloads a URL into the data directory, reusing
//! a fresh cached copy and asking before refreshing a stale one.

use crate::cache::DownloadStore;
use crate::cli::args::FetchArgs;
use crate::error::Result;
use crate::ui::ProgressSpinner;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The fetch command implementation.
pub struct FetchCommand {
    args: FetchArgs,
}

impl FetchCommand {
    /// Create a new fetch command.
    pub fn new(args: FetchArgs) -> Self {
        Self { args }
    }
}

impl Command for FetchCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        let store = DownloadStore::new(ctx.dirs.data());
        let url = &self.args.url;

        let spinner = if ctx.output.mode().shows_spinners() {
            ProgressSpinner::new(&format!("Fetching {}", url))
        } else {
            ProgressSpinner::hidden()
        };

        let fetched = if self.args.force {
            store.fetch(url)
        } else {
            store.fetch_if_stale(url, self.args.max_age_days, ctx.policy)
        };

        match fetched {
            Ok(path) => {
                spinner.finish_success(&format!("Fetched {}", url));
                ctx.output.result(&path.display().to_string());
                Ok(CommandResult::success())
            }
            Err(e) => {
                spinner.finish_error(&format!("Failed to fetch {}", url));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DataDirectories;
    use crate::ui::{MockPolicy, Output, OutputMode};
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn run(args: FetchArgs, dirs: &DataDirectories) -> Result<CommandResult> {
        let output = Output::new(OutputMode::Quiet);
        let mut policy = MockPolicy::new();
        let mut ctx = CommandContext {
            dirs,
            output: &output,
            policy: &mut policy,
        };
        FetchCommand::new(args).execute(&mut ctx)
    }

    #[test]
    fn fetch_downloads_into_data_dir() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/catalog.csv");
            then.status(200).body("name\nKepler-22b\n");
        });

        let temp = TempDir::new().unwrap();
        let dirs = DataDirectories::from_base(temp.path());
        dirs.ensure();

        let result = run(
            FetchArgs {
                url: server.url("/catalog.csv"),
                max_age_days: 1.0,
                force: false,
            },
            &dirs,
        )
        .unwrap();

        assert!(result.success);
        let entries: Vec<_> = std::fs::read_dir(dirs.data()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn failed_fetch_propagates_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone.csv");
            then.status(500);
        });

        let temp = TempDir::new().unwrap();
        let dirs = DataDirectories::from_base(temp.path());
        dirs.ensure();

        let result = run(
            FetchArgs {
                url: server.url("/gone.csv"),
                max_age_days: 1.0,
                force: false,
            },
            &dirs,
        );
        assert!(result.is_err());
    }
}
