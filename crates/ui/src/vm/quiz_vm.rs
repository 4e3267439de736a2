use club_core::quiz::{FeedbackTier, QuizAttempt, QuizReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub heading: String,
    pub score_label: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub at_first: bool,
    pub can_advance: bool,
    pub next_label: &'static str,
}

/// View-model for the question currently shown, or `None` once the attempt
/// is complete.
#[must_use]
pub fn map_quiz_question(attempt: &QuizAttempt) -> Option<QuizQuestionVm> {
    let index = attempt.current_index()?;
    let question = &attempt.questions()[index];
    let total = attempt.total();
    let on_last = index + 1 == total;

    Some(QuizQuestionVm {
        heading: format!("Question {} of {}", index + 1, total),
        score_label: format!("Score: {}/{}", attempt.score(), total),
        prompt: question.prompt().to_string(),
        options: question.options().to_vec(),
        selected: attempt.current_answer(),
        at_first: index == 0,
        can_advance: attempt.current_answer().is_some(),
        next_label: if on_last { "Finish" } else { "Next" },
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score: String,
    pub total: String,
    pub feedback: &'static str,
}

#[must_use]
pub fn map_quiz_result(report: &QuizReport) -> QuizResultVm {
    QuizResultVm {
        score: report.score.to_string(),
        total: report.total.to_string(),
        feedback: tier_feedback(report.tier),
    }
}

/// Feedback line for a tier, as shown on the results card.
#[must_use]
pub fn tier_feedback(tier: FeedbackTier) -> &'static str {
    match tier {
        FeedbackTier::Perfect => "Perfect score! You're a coding champion! 🎉",
        FeedbackTier::Good => "Great job! Keep learning! 📚",
        FeedbackTier::NeedsImprovement => "Good effort! Practice makes perfect! 💪",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use services::{ClubCatalog, QuizFlowService};

    fn attempt() -> QuizAttempt {
        QuizFlowService::new(Arc::new(ClubCatalog::seeded()))
            .start()
            .unwrap()
    }

    #[test]
    fn fresh_attempt_maps_to_first_question() {
        let vm = map_quiz_question(&attempt()).unwrap();
        assert_eq!(vm.heading, "Question 1 of 5");
        assert_eq!(vm.score_label, "Score: 0/5");
        assert!(vm.at_first);
        assert!(!vm.can_advance);
        assert_eq!(vm.next_label, "Next");
    }

    #[test]
    fn last_question_offers_finish() {
        let mut attempt = attempt();
        for option in [0, 2, 1, 1] {
            attempt.select_answer(option).unwrap();
            attempt.advance().unwrap();
        }
        let vm = map_quiz_question(&attempt).unwrap();
        assert_eq!(vm.heading, "Question 5 of 5");
        assert_eq!(vm.next_label, "Finish");
    }

    #[test]
    fn completed_attempt_has_no_question_vm() {
        let mut attempt = attempt();
        for option in [0, 2, 1, 1, 1] {
            attempt.select_answer(option).unwrap();
            attempt.advance().unwrap();
        }
        assert!(map_quiz_question(&attempt).is_none());

        let vm = map_quiz_result(&attempt.report().unwrap());
        assert_eq!(vm.score, "5");
        assert!(vm.feedback.contains("champion"));
    }
}
