use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,

    #[error("quiz attempt is already completed")]
    AlreadyCompleted,

    #[error("quiz attempt is not completed yet")]
    NotCompleted,

    #[error("already at the first question")]
    AtFirstQuestion,

    #[error("question {index} has no recorded answer")]
    Unanswered { index: usize },

    #[error("option {provided} is out of range for {len} options")]
    OptionOutOfRange { provided: usize, len: usize },
}

//
// ─── FEEDBACK TIER ─────────────────────────────────────────────────────────────
//

/// Qualitative feedback derived from the score ratio.
///
/// Ordered worst-to-best so "monotonic in score" is expressible as plain
/// `Ord` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeedbackTier {
    NeedsImprovement,
    Good,
    Perfect,
}

impl FeedbackTier {
    /// Tier for `score` correct answers out of `total` questions.
    ///
    /// A full score is `Perfect`; at least 70% (boundary inclusive, computed
    /// in integer arithmetic) is `Good`; anything below is
    /// `NeedsImprovement`.
    #[must_use]
    pub fn for_score(score: usize, total: usize) -> Self {
        if score >= total {
            Self::Perfect
        } else if score * 10 >= total * 7 {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Aggregated view of attempt progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Result of an `advance` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved to the question at this index.
    Question(usize),
    /// Advanced past the last question.
    Completed,
}

/// Final outcome of a completed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    pub tier: FeedbackTier,
}

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    At(usize),
    Completed,
}

/// One user's pass through the fixed question list.
///
/// States are the question indices plus a terminal `Completed`; `advance`,
/// `go_back`, and `reset` are the only transitions. Answers live in a sparse
/// map so skipping backwards never loses a recorded choice. Never persisted;
/// `reset` is the whole retake story.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAttempt {
    questions: Vec<Question>,
    cursor: Cursor,
    answers: BTreeMap<usize, usize>,
}

impl QuizAttempt {
    /// Start a fresh attempt at index 0 with no answers.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` for an empty question list.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            questions,
            cursor: Cursor::At(0),
            answers: BTreeMap::new(),
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Index of the question currently shown, or `None` once completed.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.cursor {
            Cursor::At(index) => Some(index),
            Cursor::Completed => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().map(|index| &self.questions[index])
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.cursor, Cursor::Completed)
    }

    /// The recorded answer for a question index, if any.
    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<usize> {
        self.answers.get(&index).copied()
    }

    /// The recorded answer for the current question, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.current_index().and_then(|index| self.answer_for(index))
    }

    /// Record `option` as the answer to the current question, replacing any
    /// earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyCompleted` after the last question, and
    /// `QuizError::OptionOutOfRange` when `option` does not index into the
    /// current question's options.
    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizError> {
        let Cursor::At(index) = self.cursor else {
            return Err(QuizError::AlreadyCompleted);
        };

        let len = self.questions[index].options().len();
        if option >= len {
            return Err(QuizError::OptionOutOfRange {
                provided: option,
                len,
            });
        }

        self.answers.insert(index, option);
        Ok(())
    }

    /// The `Next` transition: move forward, or complete from the last
    /// question. Only permitted once the current question has an answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Unanswered` when the current question has no
    /// recorded answer, `QuizError::AlreadyCompleted` after completion.
    pub fn advance(&mut self) -> Result<QuizStep, QuizError> {
        let Cursor::At(index) = self.cursor else {
            return Err(QuizError::AlreadyCompleted);
        };
        if !self.answers.contains_key(&index) {
            return Err(QuizError::Unanswered { index });
        }

        if index + 1 < self.questions.len() {
            self.cursor = Cursor::At(index + 1);
            Ok(QuizStep::Question(index + 1))
        } else {
            self.cursor = Cursor::Completed;
            Ok(QuizStep::Completed)
        }
    }

    /// The `Previous` transition.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AtFirstQuestion` from index 0 and
    /// `QuizError::AlreadyCompleted` from the terminal state.
    pub fn go_back(&mut self) -> Result<usize, QuizError> {
        match self.cursor {
            Cursor::Completed => Err(QuizError::AlreadyCompleted),
            Cursor::At(0) => Err(QuizError::AtFirstQuestion),
            Cursor::At(index) => {
                self.cursor = Cursor::At(index - 1);
                Ok(index - 1)
            }
        }
    }

    /// The `Reset` transition: allowed from any state. Clears every recorded
    /// answer and returns to the first question.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.cursor = Cursor::At(0);
    }

    /// Count of recorded answers matching their question's correct option.
    ///
    /// Unanswered questions contribute nothing. Callable at any point; the
    /// quiz shows a running score while answering.
    #[must_use]
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .filter(|&(&index, &option)| self.questions[index].is_correct(option))
            .count()
    }

    /// Returns a summary of the current attempt progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.total();
        let answered = self.answers.len();
        QuizProgress {
            total,
            answered,
            remaining: total - answered,
            is_complete: self.is_complete(),
        }
    }

    /// Final report for a completed attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotCompleted` while questions remain.
    pub fn report(&self) -> Result<QuizReport, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::NotCompleted);
        }

        let score = self.score();
        let total = self.total();
        Ok(QuizReport {
            score,
            total,
            tier: FeedbackTier::for_score(score, total),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;

    /// Five questions whose correct options are [0, 2, 1, 1, 1], mirroring
    /// the club quiz content.
    fn questions() -> Vec<Question> {
        let correct = [0usize, 2, 1, 1, 1];
        correct
            .iter()
            .enumerate()
            .map(|(i, &answer)| {
                Question::new(
                    QuestionId::new(i as u64 + 1),
                    format!("Question {}", i + 1),
                    vec![
                        "Option A".to_string(),
                        "Option B".to_string(),
                        "Option C".to_string(),
                        "Option D".to_string(),
                    ],
                    answer,
                )
                .unwrap()
            })
            .collect()
    }

    fn answer_and_advance(attempt: &mut QuizAttempt, option: usize) -> QuizStep {
        attempt.select_answer(option).unwrap();
        attempt.advance().unwrap()
    }

    #[test]
    fn empty_question_list_is_rejected() {
        assert_eq!(QuizAttempt::new(Vec::new()).unwrap_err(), QuizError::Empty);
    }

    #[test]
    fn fresh_attempt_scores_zero() {
        let attempt = QuizAttempt::new(questions()).unwrap();
        assert_eq!(attempt.score(), 0);
        assert_eq!(attempt.current_index(), Some(0));
        assert!(!attempt.is_complete());
    }

    #[test]
    fn all_correct_scores_total_and_is_perfect() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        for option in [0, 2, 1, 1, 1] {
            answer_and_advance(&mut attempt, option);
        }
        assert!(attempt.is_complete());
        let report = attempt.report().unwrap();
        assert_eq!(report.score, 5);
        assert_eq!(report.total, 5);
        assert_eq!(report.tier, FeedbackTier::Perfect);
    }

    #[test]
    fn four_of_five_is_good() {
        // First four correct, last one wrong: 80% clears the 70% bar.
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        for option in [0, 2, 1, 1] {
            answer_and_advance(&mut attempt, option);
        }
        answer_and_advance(&mut attempt, 0);
        let report = attempt.report().unwrap();
        assert_eq!(report.score, 4);
        assert_eq!(report.tier, FeedbackTier::Good);
    }

    #[test]
    fn unanswered_questions_do_not_contribute() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        for option in [0, 2, 1, 1] {
            answer_and_advance(&mut attempt, option);
        }
        // Last question never answered; running score counts four matches.
        assert_eq!(attempt.score(), 4);
        assert!(!attempt.is_complete());
        assert_eq!(attempt.report().unwrap_err(), QuizError::NotCompleted);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        assert_eq!(
            attempt.advance().unwrap_err(),
            QuizError::Unanswered { index: 0 }
        );
    }

    #[test]
    fn go_back_is_rejected_at_first_question() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        assert_eq!(attempt.go_back().unwrap_err(), QuizError::AtFirstQuestion);
    }

    #[test]
    fn go_back_keeps_recorded_answers() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        answer_and_advance(&mut attempt, 0);
        assert_eq!(attempt.go_back().unwrap(), 0);
        assert_eq!(attempt.current_answer(), Some(0));
    }

    #[test]
    fn last_question_advances_to_completed() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        for option in [0, 2, 1, 1] {
            answer_and_advance(&mut attempt, option);
        }
        attempt.select_answer(1).unwrap();
        assert_eq!(attempt.advance().unwrap(), QuizStep::Completed);
        assert_eq!(attempt.current_index(), None);
    }

    #[test]
    fn completed_attempt_rejects_further_transitions() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        for option in [0, 2, 1, 1, 1] {
            answer_and_advance(&mut attempt, option);
        }
        assert_eq!(attempt.advance().unwrap_err(), QuizError::AlreadyCompleted);
        assert_eq!(attempt.go_back().unwrap_err(), QuizError::AlreadyCompleted);
        assert_eq!(
            attempt.select_answer(0).unwrap_err(),
            QuizError::AlreadyCompleted
        );
    }

    #[test]
    fn reset_clears_answers_from_any_state() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        for option in [0, 2, 1, 1, 1] {
            answer_and_advance(&mut attempt, option);
        }
        assert!(attempt.is_complete());

        attempt.reset();
        assert_eq!(attempt.current_index(), Some(0));
        assert_eq!(attempt.score(), 0);
        assert_eq!(attempt.progress().answered, 0);
    }

    #[test]
    fn select_answer_rejects_out_of_range_option() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        assert_eq!(
            attempt.select_answer(4).unwrap_err(),
            QuizError::OptionOutOfRange { provided: 4, len: 4 }
        );
    }

    #[test]
    fn reselecting_replaces_the_answer() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        attempt.select_answer(3).unwrap();
        attempt.select_answer(0).unwrap();
        assert_eq!(attempt.current_answer(), Some(0));
        assert_eq!(attempt.score(), 1);
    }

    #[test]
    fn progress_tracks_answered_and_remaining() {
        let mut attempt = QuizAttempt::new(questions()).unwrap();
        answer_and_advance(&mut attempt, 0);
        answer_and_advance(&mut attempt, 2);
        let progress = attempt.progress();
        assert_eq!(progress.total, 5);
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.remaining, 3);
        assert!(!progress.is_complete);
    }

    #[test]
    fn tier_boundary_at_seventy_percent_is_inclusive() {
        assert_eq!(FeedbackTier::for_score(7, 10), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_score(6, 10), FeedbackTier::NeedsImprovement);
        assert_eq!(FeedbackTier::for_score(10, 10), FeedbackTier::Perfect);
        // 3.5/5 rounds nowhere: 4/5 is good, 3/5 is not.
        assert_eq!(FeedbackTier::for_score(4, 5), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_score(3, 5), FeedbackTier::NeedsImprovement);
    }

    #[test]
    fn tier_is_monotonic_in_score() {
        let total = 5;
        let mut last = FeedbackTier::NeedsImprovement;
        for score in 0..=total {
            let tier = FeedbackTier::for_score(score, total);
            assert!(tier >= last, "tier regressed at score {score}");
            last = tier;
        }
    }
}
