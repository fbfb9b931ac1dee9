//! Output mode and writer.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including per-column detail.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show nothing except errors and requested results.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows per-item detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a line if the mode allows status messages.
    pub fn println(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a line only in verbose mode.
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", msg);
        }
    }

    /// Write a result line unconditionally (e.g., a requested path).
    pub fn result(&self, msg: &str) {
        println!("{}", msg);
    }
}
