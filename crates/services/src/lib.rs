#![forbid(unsafe_code)]

pub mod catalog;
pub mod countdown_service;
pub mod error;
pub mod quiz_service;
pub mod seed;
pub mod signup_service;

pub use club_core::Clock;

pub use catalog::{ClubCatalog, ClubInfo, ClubStat, OfficeHours, SocialLink};
pub use countdown_service::{CountdownService, CountdownSnapshot};
pub use error::{QuizFlowError, SignupError};
pub use quiz_service::QuizFlowService;
pub use signup_service::{InMemorySink, SignupReceipt, SignupService, SignupSink};
