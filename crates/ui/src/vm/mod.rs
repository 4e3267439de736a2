mod banner_vm;
mod countdown_vm;
mod event_vm;
mod preview_vm;
mod project_vm;
mod quiz_vm;
mod time_fmt;

pub use banner_vm::{BannerKind, BannerVm};
pub use countdown_vm::{CountdownUnitVm, CountdownVm, map_countdown};
pub use event_vm::{EventCardVm, map_event_card};
pub use preview_vm::{STARTER_DOCUMENT, sanitize_preview};
pub use project_vm::{ProjectCardVm, map_project_card};
pub use quiz_vm::{
    QuizQuestionVm, QuizResultVm, map_quiz_question, map_quiz_result, tier_feedback,
};
pub use time_fmt::{format_event_date, format_event_time};
