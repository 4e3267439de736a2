use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::EventId;

//
// ─── VALIDATION ────────────────────────────────────────────────────────────────
//

/// Validation failure for a submitted form.
///
/// Nothing here is persisted or transmitted; validation is the only gate a
/// submission passes through before landing in the in-process sink.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("required field is missing: {field}")]
    MissingField { field: &'static str },

    #[error("invalid email address: {provided}")]
    InvalidEmail { provided: String },
}

fn require(field: &'static str, value: &str) -> Result<String, RegistrationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistrationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

fn require_email(field: &'static str, value: &str) -> Result<String, RegistrationError> {
    let value = require(field, value)?;
    let invalid = || RegistrationError::InvalidEmail {
        provided: value.clone(),
    };

    let Some((local, domain)) = value.split_once('@') else {
        return Err(invalid());
    };
    if local.is_empty() || domain.is_empty() {
        return Err(invalid());
    }
    // Keep the bar roughly where browser `type="email"` puts it, plus a dot
    // requirement so "a@b" does not slip through.
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    if value.contains(char::is_whitespace) {
        return Err(invalid());
    }

    Ok(value)
}

//
// ─── MEMBERSHIP ────────────────────────────────────────────────────────────────
//

/// Raw "Join the club" form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: String,
    pub reason: String,
}

impl MembershipDraft {
    /// Validate every required field and stamp the submission time.
    ///
    /// # Errors
    ///
    /// Returns the first `RegistrationError` encountered, in field order.
    pub fn validate(self, now: DateTime<Utc>) -> Result<MembershipRegistration, RegistrationError> {
        Ok(MembershipRegistration {
            name: require("name", &self.name)?,
            email: require_email("email", &self.email)?,
            department: require("department", &self.department)?,
            year: require("year", &self.year)?,
            reason: require("reason", &self.reason)?,
            submitted_at: now,
        })
    }
}

/// A validated membership registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipRegistration {
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: String,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}

//
// ─── EVENT SIGNUP ──────────────────────────────────────────────────────────────
//

/// Raw per-event registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSignupDraft {
    pub name: String,
    pub email: String,
    pub year: String,
    pub student_id: String,
    pub department: String,
}

impl EventSignupDraft {
    /// Validate the form for the given event.
    ///
    /// The event id itself is resolved against the catalog by the signup
    /// service; this step only owns field validation.
    ///
    /// # Errors
    ///
    /// Returns the first `RegistrationError` encountered, in field order.
    pub fn validate(
        self,
        event_id: EventId,
        now: DateTime<Utc>,
    ) -> Result<EventSignup, RegistrationError> {
        Ok(EventSignup {
            event_id,
            name: require("name", &self.name)?,
            email: require_email("email", &self.email)?,
            year: require("year", &self.year)?,
            student_id: require("student id", &self.student_id)?,
            department: require("department", &self.department)?,
            submitted_at: now,
        })
    }
}

/// A validated registration for a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSignup {
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    pub year: String,
    pub student_id: String,
    pub department: String,
    pub submitted_at: DateTime<Utc>,
}

//
// ─── NEWSLETTER ────────────────────────────────────────────────────────────────
//

/// Raw newsletter signup input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterDraft {
    pub email: String,
}

impl NewsletterDraft {
    /// Validate the address and stamp the submission time.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError` for a missing or malformed address.
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewsletterSignup, RegistrationError> {
        Ok(NewsletterSignup {
            email: require_email("email", &self.email)?,
            submitted_at: now,
        })
    }
}

/// A validated newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSignup {
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn membership() -> MembershipDraft {
        MembershipDraft {
            name: "Asha Rao".to_string(),
            email: "asha@gmu.ac.in".to_string(),
            department: "Computer Science".to_string(),
            year: "2nd Year".to_string(),
            reason: "I want to build things with people.".to_string(),
        }
    }

    #[test]
    fn membership_validates_and_stamps_time() {
        let now = fixed_now();
        let reg = membership().validate(now).unwrap();
        assert_eq!(reg.name, "Asha Rao");
        assert_eq!(reg.submitted_at, now);
    }

    #[test]
    fn membership_trims_whitespace() {
        let mut draft = membership();
        draft.name = "  Asha Rao  ".to_string();
        let reg = draft.validate(fixed_now()).unwrap();
        assert_eq!(reg.name, "Asha Rao");
    }

    #[test]
    fn blank_field_is_missing() {
        let mut draft = membership();
        draft.reason = "   ".to_string();
        let err = draft.validate(fixed_now()).unwrap_err();
        assert_eq!(err, RegistrationError::MissingField { field: "reason" });
    }

    #[test]
    fn email_without_at_is_invalid() {
        let mut draft = membership();
        draft.email = "asha.gmu.ac.in".to_string();
        assert!(matches!(
            draft.validate(fixed_now()).unwrap_err(),
            RegistrationError::InvalidEmail { .. }
        ));
    }

    #[test]
    fn email_without_domain_dot_is_invalid() {
        let mut draft = membership();
        draft.email = "asha@gmu".to_string();
        assert!(matches!(
            draft.validate(fixed_now()).unwrap_err(),
            RegistrationError::InvalidEmail { .. }
        ));
    }

    #[test]
    fn event_signup_validates_fields_in_order() {
        let draft = EventSignupDraft {
            name: "Asha Rao".to_string(),
            email: String::new(),
            year: "2nd Year".to_string(),
            student_id: "GMU-1042".to_string(),
            department: "CSE".to_string(),
        };
        let err = draft.validate(EventId::new(1), fixed_now()).unwrap_err();
        assert_eq!(err, RegistrationError::MissingField { field: "email" });
    }

    #[test]
    fn event_signup_keeps_event_id() {
        let draft = EventSignupDraft {
            name: "Asha Rao".to_string(),
            email: "asha@gmu.ac.in".to_string(),
            year: "2nd Year".to_string(),
            student_id: "GMU-1042".to_string(),
            department: "CSE".to_string(),
        };
        let signup = draft.validate(EventId::new(3), fixed_now()).unwrap();
        assert_eq!(signup.event_id, EventId::new(3));
    }

    #[test]
    fn newsletter_rejects_spaces_in_address() {
        let draft = NewsletterDraft {
            email: "asha rao@gmu.ac.in".to_string(),
        };
        assert!(matches!(
            draft.validate(fixed_now()).unwrap_err(),
            RegistrationError::InvalidEmail { .. }
        ));
    }
}
