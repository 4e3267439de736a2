use thiserror::Error;

use crate::countdown::CountdownError;
use crate::model::{EventError, QuestionError, RegistrationError};
use crate::quiz::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Event(#[from] EventError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    Countdown(#[from] CountdownError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
