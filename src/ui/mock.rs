//! Scripted confirmations for tests.

use std::collections::VecDeque;

use crate::error::Result;

use super::ConfirmPolicy;

/// Policy that replays a queue of scripted answers and records every
/// question it was asked.
///
/// When the queue runs dry, further questions are answered "no" (matching
/// the safe default of the real policies).
#[derive(Debug, Default)]
pub struct MockPolicy {
    answers: VecDeque<bool>,
    questions: Vec<String>,
}

impl MockPolicy {
    /// Create a policy with no scripted answers (always declines).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy that replays the given answers in order.
    pub fn with_answers(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            questions: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Number of questions asked so far.
    pub fn times_asked(&self) -> usize {
        self.questions.len()
    }
}

impl ConfirmPolicy for MockPolicy {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
