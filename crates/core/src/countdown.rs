use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Event;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CountdownError {
    #[error("no events to count down to")]
    NoEvents,
}

//
// ─── COUNTDOWN ─────────────────────────────────────────────────────────────────
//

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Whole-second countdown decomposed into display units.
///
/// `from_seconds` and `total_seconds` are exact inverses for non-negative
/// inputs: `days*86400 + hours*3600 + minutes*60 + seconds` always equals the
/// seconds the value was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a second count into days/hours/minutes/seconds.
    ///
    /// Negative inputs saturate to zero: a countdown never runs backwards.
    #[must_use]
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        let days = total / SECS_PER_DAY;
        let mut rem = total % SECS_PER_DAY;
        let hours = rem / SECS_PER_HOUR;
        rem %= SECS_PER_HOUR;
        let minutes = rem / SECS_PER_MINUTE;
        let seconds = rem % SECS_PER_MINUTE;

        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Recompose the total second count.
    #[must_use]
    pub fn total_seconds(&self) -> i64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

//
// ─── SELECTION ─────────────────────────────────────────────────────────────────
//

/// Pick the event the countdown targets.
///
/// Prefers the event with the earliest start strictly after `now`. When every
/// event is already in the past, falls back to the earliest event overall so
/// callers still have something to display (the countdown for it clamps at
/// zero). Returns `None` only for an empty slice.
#[must_use]
pub fn next_event(events: &[Event], now: DateTime<Utc>) -> Option<&Event> {
    events
        .iter()
        .filter(|event| event.is_upcoming(now))
        .min_by_key(|event| event.starts_at())
        .or_else(|| events.iter().min_by_key(|event| event.starts_at()))
}

/// Countdown to the next event, in whole seconds.
///
/// # Errors
///
/// Returns `CountdownError::NoEvents` when `events` is empty.
pub fn compute_countdown(
    events: &[Event],
    now: DateTime<Utc>,
) -> Result<Countdown, CountdownError> {
    let target = next_event(events, now).ok_or(CountdownError::NoEvents)?;
    let remaining = target.starts_at().signed_duration_since(now).num_seconds();
    Ok(Countdown::from_seconds(remaining))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
