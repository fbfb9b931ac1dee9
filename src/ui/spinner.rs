//! Progress spinners.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// A progress spinner for long-running operations (downloads, rendering).
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.magenta} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Update the spinner message.
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    /// Finish, replacing the spinner with a success line.
    pub fn finish_success(&self, msg: &str) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar
            .finish_with_message(format!("{} {}", style("✓").green(), msg));
    }

    /// Finish, replacing the spinner with a failure line.
    pub fn finish_error(&self, msg: &str) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar
            .finish_with_message(format!("{} {}", style("✗").red(), msg));
    }
}
