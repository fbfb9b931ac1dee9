//! Summarize command implementation.
//!
//! `exoatlas summarize <population.json>` renders the histogram summary of
//! a population to an SVG file.

use std::path::PathBuf;

use crate::cli::args::SummarizeArgs;
use crate::error::Result;
use crate::population::Population;
use crate::summary::{plot_histograms, SvgSurface};
use crate::ui::ProgressSpinner;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The summarize command implementation.
pub struct SummarizeCommand {
    args: SummarizeArgs,
}

impl SummarizeCommand {
    /// Create a new summarize command.
    pub fn new(args: SummarizeArgs) -> Self {
        Self { args }
    }

    fn output_path(&self) -> PathBuf {
        self.args
            .output
            .clone()
            .unwrap_or_else(|| self.args.population.with_extension("svg"))
    }
}

impl Command for SummarizeCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        let pop = Population::load(&self.args.population)?;

        let required: Vec<String> = if self.args.columns.is_empty() {
            pop.column_names().into_iter().map(String::from).collect()
        } else {
            self.args.columns.clone()
        };

        let spinner = if ctx.output.mode().shows_spinners() {
            ProgressSpinner::new(&format!("Summarizing {}", pop.name()))
        } else {
            ProgressSpinner::hidden()
        };

        let mut surface = SvgSurface::new();
        if let Err(e) = plot_histograms(&pop, &required, &mut surface) {
            spinner.finish_error(&format!("Could not summarize {}", pop.name()));
            return Err(e);
        }

        let out_path = self.output_path();
        std::fs::write(&out_path, surface.into_svg())?;
        spinner.finish_success(&format!(
            "Summarized {} columns of {}",
            required.len(),
            pop.name()
        ));
        ctx.output.result(&out_path.display().to_string());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DataDirectories;
    use crate::ui::{MockPolicy, Output, OutputMode};
    use tempfile::TempDir;

    const POPULATION: &str = r#"{
        "name": "confirmed",
        "columns": [
            { "name": "radius", "kind": "quantitative", "values": [1.0, null, 3.0, null] },
            { "name": "method", "kind": "categorical", "values": ["transit", "rv", "transit", null] }
        ]
    }"#;

    fn run(args: SummarizeArgs, dirs: &DataDirectories) -> Result<CommandResult> {
        let output = Output::new(OutputMode::Quiet);
        let mut policy = MockPolicy::new();
        let mut ctx = CommandContext {
            dirs,
            output: &output,
            policy: &mut policy,
        };
        SummarizeCommand::new(args).execute(&mut ctx)
    }

    #[test]
    fn summarize_writes_svg_next_to_population() {
        let temp = TempDir::new().unwrap();
        let dirs = DataDirectories::from_base(temp.path());
        let pop_path = temp.path().join("pop.json");
        std::fs::write(&pop_path, POPULATION).unwrap();

        let result = run(
            SummarizeArgs {
                population: pop_path.clone(),
                columns: vec![],
                output: None,
            },
            &dirs,
        )
        .unwrap();

        assert!(result.success);
        let svg = std::fs::read_to_string(pop_path.with_extension("svg")).unwrap();
        assert!(svg.contains("radius lacks 2/4 (50%)"));
        assert!(svg.contains("method lacks 1/4 (25%)"));
    }

    #[test]
    fn summarize_respects_explicit_columns_and_output() {
        let temp = TempDir::new().unwrap();
        let dirs = DataDirectories::from_base(temp.path());
        let pop_path = temp.path().join("pop.json");
        let out_path = temp.path().join("report.svg");
        std::fs::write(&pop_path, POPULATION).unwrap();

        run(
            SummarizeArgs {
                population: pop_path,
                columns: vec!["radius".into()],
                output: Some(out_path.clone()),
            },
            &dirs,
        )
        .unwrap();

        let svg = std::fs::read_to_string(&out_path).unwrap();
        assert!(svg.contains("radius"));
        assert!(!svg.contains("method lacks"));
    }

    #[test]
    fn unknown_column_is_an_error() {
        let temp = TempDir::new().unwrap();
        let dirs = DataDirectories::from_base(temp.path());
        let pop_path = temp.path().join("pop.json");
        std::fs::write(&pop_path, POPULATION).unwrap();

        let result = run(
            SummarizeArgs {
                population: pop_path,
                columns: vec!["mass".into()],
                output: None,
            },
            &dirs,
        );
        assert!(result.is_err());
    }
}
