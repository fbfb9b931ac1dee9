//! Interactive terminal confirmations.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{ExoatlasError, Result};

use super::ConfirmPolicy;

/// Convert dialoguer errors to ExoatlasError.
fn map_dialoguer_err(e: dialoguer::Error) -> ExoatlasError {
    ExoatlasError::Io(e.into())
}

/// Policy that asks the operator on the attached terminal.
///
/// Prompts default to "no", so pressing enter declines the action.
pub struct TerminalPolicy {
    term: Term,
}

impl TerminalPolicy {
    /// Create a policy prompting on stderr.
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmPolicy for TerminalPolicy {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(false)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_policy_reports_interactive() {
        let policy = TerminalPolicy::new();
        assert!(policy.is_interactive());
    }
}
