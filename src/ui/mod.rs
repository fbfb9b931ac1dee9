//! User-facing interaction components.
//!
//! This module provides:
//! - [`ConfirmPolicy`] trait abstracting yes/no confirmations
//! - [`TerminalPolicy`] for interactive terminal usage
//! - [`NonInteractivePolicy`] for CI/headless environments
//! - [`MockPolicy`] for tests
//! - A progress spinner for long-running operations
//!
//! Every destructive or blocking decision in the crate goes through a
//! [`ConfirmPolicy`], so automated callers can supply their own answer
//! instead of blocking on stdin.
//!
//! # Example
//!
//! ```
//! use exoatlas::ui::{create_policy, ConfirmPolicy};
//!
//! // Non-interactive policies never block and decline by default.
//! let mut policy = create_policy(false, false);
//! assert!(!policy.confirm("Wipe everything?").unwrap());
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;

pub use mock::MockPolicy;
pub use non_interactive::NonInteractivePolicy;
pub use output::{Output, OutputMode};
pub use spinner::ProgressSpinner;
pub use terminal::TerminalPolicy;

use crate::error::Result;

/// Capability for answering yes/no questions.
///
/// Implementations decide how a confirmation is obtained: an interactive
/// terminal prompt, a fixed answer for automated runs, or a scripted queue
/// in tests. A blank or unexpected answer is always negative.
pub trait ConfirmPolicy {
    /// Ask the question and return the answer.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Whether this policy may block on operator input.
    fn is_interactive(&self) -> bool;
}

/// Create the appropriate policy for the current invocation.
///
/// Interactive invocations get a terminal prompt; everything else gets a
/// fixed answer (`assume_yes` for `--yes`, otherwise always-decline).
pub fn create_policy(interactive: bool, assume_yes: bool) -> Box<dyn ConfirmPolicy> {
    if assume_yes {
        Box::new(NonInteractivePolicy::assume_yes())
    } else if interactive {
        Box::new(TerminalPolicy::new())
    } else {
        Box::new(NonInteractivePolicy::new())
    }
}

/// Parse a free-text answer the way the prompts describe it (`[y/N]`).
///
/// Any answer whose first non-space character is `y` or `Y` is affirmative;
/// everything else, including empty input, is negative.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}
