use chrono::{NaiveDate, NaiveTime};

/// "November 15, 2025" — long month, no day padding.
#[must_use]
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "09:00 AM" — twelve-hour wall clock.
#[must_use]
pub fn format_event_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}
