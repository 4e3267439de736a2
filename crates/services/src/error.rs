//! Shared error types for the services crate.

use thiserror::Error;

use club_core::model::{EventId, RegistrationError};
use club_core::quiz::QuizError;

/// Errors emitted by `QuizFlowService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted by `SignupService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignupError {
    #[error(transparent)]
    Validation(#[from] RegistrationError),

    #[error("unknown event id: {id}")]
    UnknownEvent { id: EventId },

    #[error("{email} is already subscribed")]
    AlreadySubscribed { email: String },
}
