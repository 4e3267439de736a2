use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

/// A multiple-choice quiz question.
///
/// Invariant: `correct_option` is always a valid index into `options`.
/// The constructor is the only way to build one, so the invariant holds for
/// every `Question` in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt,
    /// `QuestionError::NoOptions` for an empty option list, and
    /// `QuestionError::CorrectOptionOutOfRange` when `correct_option` does not
    /// index into `options`.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if correct_option >= options.len() {
            return Err(QuestionError::CorrectOptionOutOfRange {
                provided: correct_option,
                len: options.len(),
            });
        }

        Ok(Self {
            id,
            prompt,
            options,
            correct_option,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// Returns true if `option` is the correct choice.
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("question has no options")]
    NoOptions,

    #[error("correct option {provided} is out of range for {len} options")]
    CorrectOptionOutOfRange { provided: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec![
            "Queue".to_string(),
            "Stack".to_string(),
            "Array".to_string(),
            "Tree".to_string(),
        ]
    }

    #[test]
    fn new_accepts_in_range_correct_option() {
        let q = Question::new(QuestionId::new(4), "Which is LIFO?", options(), 1).unwrap();
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn new_rejects_out_of_range_correct_option() {
        let err = Question::new(QuestionId::new(4), "Which is LIFO?", options(), 4).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectOptionOutOfRange { provided: 4, len: 4 }
        );
    }

    #[test]
    fn new_rejects_empty_options() {
        let err = Question::new(QuestionId::new(1), "Pick one", Vec::new(), 0).unwrap_err();
        assert_eq!(err, QuestionError::NoOptions);
    }

    #[test]
    fn new_rejects_blank_prompt() {
        let err = Question::new(QuestionId::new(1), "  ", options(), 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }
}
