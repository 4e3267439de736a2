use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::info;

use club_core::model::{
    EventId, EventSignup, EventSignupDraft, MembershipDraft, MembershipRegistration,
    NewsletterDraft, NewsletterSignup,
};
use club_core::time::Clock;

use crate::catalog::ClubCatalog;
use crate::error::SignupError;

//
// ─── DELIVERY BOUNDARY ─────────────────────────────────────────────────────────
//

/// Where accepted submissions go.
///
/// There is no real delivery anywhere in this app; the trait exists so the
/// simulated boundary is explicit and tests can observe what was accepted
/// instead of trusting an always-succeeds path.
pub trait SignupSink: Send + Sync {
    fn accept_membership(&self, registration: &MembershipRegistration);
    fn accept_event_signup(&self, signup: &EventSignup);
    fn accept_newsletter(&self, signup: &NewsletterSignup);
}

/// Stand-in sink: collects accepted submissions in memory. Nothing leaves the
/// process and nothing survives it.
#[derive(Default)]
pub struct InMemorySink {
    memberships: Mutex<Vec<MembershipRegistration>>,
    event_signups: Mutex<Vec<EventSignup>>,
    newsletter: Mutex<Vec<NewsletterSignup>>,
}

impl InMemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn memberships(&self) -> Vec<MembershipRegistration> {
        self.memberships.lock().expect("sink lock poisoned").clone()
    }

    #[must_use]
    pub fn event_signups(&self) -> Vec<EventSignup> {
        self.event_signups
            .lock()
            .expect("sink lock poisoned")
            .clone()
    }

    #[must_use]
    pub fn newsletter(&self) -> Vec<NewsletterSignup> {
        self.newsletter.lock().expect("sink lock poisoned").clone()
    }
}

impl SignupSink for InMemorySink {
    fn accept_membership(&self, registration: &MembershipRegistration) {
        self.memberships
            .lock()
            .expect("sink lock poisoned")
            .push(registration.clone());
    }

    fn accept_event_signup(&self, signup: &EventSignup) {
        self.event_signups
            .lock()
            .expect("sink lock poisoned")
            .push(signup.clone());
    }

    fn accept_newsletter(&self, signup: &NewsletterSignup) {
        self.newsletter
            .lock()
            .expect("sink lock poisoned")
            .push(signup.clone());
    }
}

//
// ─── RECEIPTS ──────────────────────────────────────────────────────────────────
//

/// Confirmation text handed back to the submitting view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupReceipt {
    pub message: String,
    pub detail: String,
    pub recorded_at: DateTime<Utc>,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Validates forms and hands accepted submissions to the sink.
///
/// All operations are local-only and non-durable: no retries, no timeouts,
/// nothing transmitted.
pub struct SignupService {
    clock: Clock,
    catalog: Arc<ClubCatalog>,
    sink: Arc<dyn SignupSink>,
    subscribed: Mutex<HashSet<String>>,
}

impl SignupService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<ClubCatalog>, sink: Arc<dyn SignupSink>) -> Self {
        Self {
            clock,
            catalog,
            sink,
            subscribed: Mutex::new(HashSet::new()),
        }
    }

    /// Validate and accept a membership registration.
    ///
    /// # Errors
    ///
    /// Returns `SignupError::Validation` for missing fields or a malformed
    /// email.
    pub fn register_member(&self, draft: MembershipDraft) -> Result<SignupReceipt, SignupError> {
        let registration = draft.validate(self.clock.now())?;
        self.sink.accept_membership(&registration);
        info!(email = %registration.email, "membership registration accepted");

        Ok(SignupReceipt {
            message: "Registration Successful!".to_string(),
            detail: "Welcome to GMU Coding Club! We'll be in touch soon.".to_string(),
            recorded_at: registration.submitted_at,
        })
    }

    /// Validate and accept a registration for one event.
    ///
    /// # Errors
    ///
    /// Returns `SignupError::UnknownEvent` when the id is not in the catalog
    /// and `SignupError::Validation` for bad form input.
    pub fn register_for_event(
        &self,
        event_id: EventId,
        draft: EventSignupDraft,
    ) -> Result<SignupReceipt, SignupError> {
        let event = self
            .catalog
            .event(event_id)
            .ok_or(SignupError::UnknownEvent { id: event_id })?;
        let signup = draft.validate(event_id, self.clock.now())?;
        self.sink.accept_event_signup(&signup);
        info!(event = %event.title(), email = %signup.email, "event signup accepted");

        Ok(SignupReceipt {
            message: format!("You're registered for {}!", event.title()),
            detail: "We'll send you a confirmation email shortly.".to_string(),
            recorded_at: signup.submitted_at,
        })
    }

    /// Validate and accept a newsletter subscription.
    ///
    /// Addresses dedupe case-insensitively for the lifetime of the service.
    ///
    /// # Errors
    ///
    /// Returns `SignupError::AlreadySubscribed` for a repeat address and
    /// `SignupError::Validation` for a malformed one.
    pub fn subscribe(&self, draft: NewsletterDraft) -> Result<SignupReceipt, SignupError> {
        let signup = draft.validate(self.clock.now())?;

        let key = signup.email.to_ascii_lowercase();
        let mut subscribed = self.subscribed.lock().expect("subscriber lock poisoned");
        if !subscribed.insert(key) {
            return Err(SignupError::AlreadySubscribed {
                email: signup.email,
            });
        }
        drop(subscribed);

        self.sink.accept_newsletter(&signup);
        info!(email = %signup.email, "newsletter subscription accepted");

        Ok(SignupReceipt {
            message: "Subscribed!".to_string(),
            detail: "You'll now receive our latest updates and announcements.".to_string(),
            recorded_at: signup.submitted_at,
        })
    }
}
