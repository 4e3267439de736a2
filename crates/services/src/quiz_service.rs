use std::sync::Arc;

use tracing::info;

use club_core::quiz::{QuizAttempt, QuizReport};

use crate::catalog::ClubCatalog;
use crate::error::QuizFlowError;

/// Hands out quiz attempts over the catalog's fixed question list and turns
/// completed attempts into reports.
#[derive(Clone)]
pub struct QuizFlowService {
    catalog: Arc<ClubCatalog>,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(catalog: Arc<ClubCatalog>) -> Self {
        Self { catalog }
    }

    /// Start a fresh attempt: question 0, no answers.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError::Empty` if the catalog carries no questions.
    pub fn start(&self) -> Result<QuizAttempt, QuizFlowError> {
        let attempt = QuizAttempt::new(self.catalog.questions().to_vec())?;
        Ok(attempt)
    }

    /// Report for a completed attempt.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError::NotCompleted` while questions remain.
    pub fn finish(&self, attempt: &QuizAttempt) -> Result<QuizReport, QuizFlowError> {
        let report = attempt.report()?;
        info!(
            score = report.score,
            total = report.total,
            tier = ?report.tier,
            "quiz attempt completed"
        );
        Ok(report)
    }
}
