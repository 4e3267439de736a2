use club_core::model::Event;

use crate::vm::time_fmt::{format_event_date, format_event_time};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCardVm {
    pub id: u64,
    pub title: String,
    pub date_label: String,
    pub time_label: String,
    pub description: String,
}

#[must_use]
pub fn map_event_card(event: &Event) -> EventCardVm {
    EventCardVm {
        id: event.id().value(),
        title: event.title().to_string(),
        date_label: format_event_date(event.date()),
        time_label: format_event_time(event.time()),
        description: event.description().to_string(),
    }
}
