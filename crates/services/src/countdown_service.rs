use std::sync::Arc;

use chrono::{DateTime, Utc};

use club_core::countdown::{Countdown, CountdownError, next_event};
use club_core::model::EventId;
use club_core::time::Clock;

use crate::catalog::ClubCatalog;

/// What the countdown card shows for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownSnapshot {
    pub event_id: EventId,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub remaining: Countdown,
}

/// Clock-aware view over the pure countdown functions.
///
/// The 1-second cadence is owned by the presenting view; this service just
/// answers "what would the card show right now".
#[derive(Clone)]
pub struct CountdownService {
    clock: Clock,
    catalog: Arc<ClubCatalog>,
}

impl CountdownService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<ClubCatalog>) -> Self {
        Self { clock, catalog }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Snapshot of the next-event countdown at this clock's current instant.
    ///
    /// # Errors
    ///
    /// Returns `CountdownError::NoEvents` when the catalog has no events.
    pub fn snapshot(&self) -> Result<CountdownSnapshot, CountdownError> {
        self.snapshot_at(self.clock.now())
    }

    /// Snapshot at an explicit instant. Used by the events view, which ticks
    /// once a second against a moving "now".
    ///
    /// # Errors
    ///
    /// Returns `CountdownError::NoEvents` when the catalog has no events.
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> Result<CountdownSnapshot, CountdownError> {
        let events = self.catalog.events();
        let target = next_event(events, now).ok_or(CountdownError::NoEvents)?;
        let remaining = target.starts_at().signed_duration_since(now).num_seconds();

        Ok(CountdownSnapshot {
            event_id: target.id(),
            title: target.title().to_string(),
            starts_at: target.starts_at(),
            remaining: Countdown::from_seconds(remaining),
        })
    }
}
