#![forbid(unsafe_code)]

pub mod countdown;
pub mod error;
pub mod model;
pub mod quiz;
pub mod time;

pub use countdown::{Countdown, CountdownError, compute_countdown, next_event};
pub use error::Error;
pub use quiz::{FeedbackTier, QuizAttempt, QuizError, QuizProgress, QuizReport, QuizStep};
pub use time::Clock;
