//! Fixed-answer confirmations for CI/headless environments.

use crate::error::Result;

use super::ConfirmPolicy;

/// Policy with a fixed answer and no prompting.
///
/// The default answer is "no": in a pipeline nobody is there to approve a
/// destructive reset or a re-download, so the safe choice is to decline.
/// `EXOATLAS_ASSUME_YES=1` flips the answer without code changes, mirroring
/// the CLI's `--yes` flag.
pub struct NonInteractivePolicy {
    answer: bool,
}

impl NonInteractivePolicy {
    /// Create an always-decline policy, honoring `EXOATLAS_ASSUME_YES`.
    pub fn new() -> Self {
        let answer = std::env::var("EXOATLAS_ASSUME_YES")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self { answer }
    }

    /// Create an always-accept policy (`--yes`).
    pub fn assume_yes() -> Self {
        Self { answer: true }
    }

    /// Create with an explicit answer (for testing).
    pub fn with_answer(answer: bool) -> Self {
        Self { answer }
    }
}

impl Default for NonInteractivePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmPolicy for NonInteractivePolicy {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        tracing::debug!(
            question,
            answer = self.answer,
            "answering confirmation non-interactively"
        );
        Ok(self.answer)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_answer_is_no() {
        let mut policy = NonInteractivePolicy::with_answer(false);
        assert!(!policy.confirm("Delete everything?").unwrap());
    }

    #[test]
    fn assume_yes_answers_yes() {
        let mut policy = NonInteractivePolicy::assume_yes();
        assert!(policy.confirm("Delete everything?").unwrap());
    }

    #[test]
    fn never_interactive() {
        assert!(!NonInteractivePolicy::with_answer(true).is_interactive());
    }
}
