mod event;
mod ids;
mod project;
mod question;
mod registration;

pub use event::{Event, EventDraft, EventError};
pub use ids::{EventId, ParseIdError, ProjectId, QuestionId};
pub use project::{ParseCategoryError, Project, ProjectCategory, ProjectFilter};
pub use question::{Question, QuestionError};
pub use registration::{
    EventSignup, EventSignupDraft, MembershipDraft, MembershipRegistration, NewsletterDraft,
    NewsletterSignup, RegistrationError,
};
