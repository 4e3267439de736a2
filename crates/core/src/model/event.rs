use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::EventId;

//
// ─── EVENT TYPES ───────────────────────────────────────────────────────────────
//

/// Unvalidated event input, as authored in the seed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
}

impl EventDraft {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            time,
            description: description.into(),
        }
    }

    /// Validate the draft and assign its identity.
    ///
    /// # Errors
    ///
    /// Returns `EventError::EmptyTitle` or `EventError::EmptyDescription` when
    /// the corresponding field is blank.
    pub fn validate(self, id: EventId) -> Result<Event, EventError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EventError::EmptyTitle);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(EventError::EmptyDescription);
        }

        Ok(Event {
            id,
            title: title.to_string(),
            date: self.date,
            time: self.time,
            description: description.to_string(),
        })
    }
}

/// A scheduled club activity. Immutable once validated; there is no
/// create/update lifecycle at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    title: String,
    date: NaiveDate,
    time: NaiveTime,
    description: String,
}

impl Event {
    #[must_use]
    pub fn id(&self) -> EventId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The event's start instant. Seeded date+time pairs are interpreted as
    /// UTC so countdowns stay deterministic.
    #[must_use]
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.date.and_time(self.time).and_utc()
    }

    /// Returns true if the event starts strictly after `now`.
    #[must_use]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.starts_at() > now
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("event title is empty")]
    EmptyTitle,

    #[error("event description is empty")]
    EmptyDescription,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
