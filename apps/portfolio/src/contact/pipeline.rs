//! Contact form state machine.
//!
//! ```text
//! Idle -> Validating -> Idle (field errors)
//!                    -> Submitting -> Idle (Success | Rejected | NetworkError)
//! ```
//!
//! Validation runs synchronously inside `begin_submit`, before any I/O. A form
//! holds at most one submission in flight; the submit control is disabled for
//! as long as it does. A submission that completes after its form was dropped
//! touches nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use super::notify::{Toast, Toaster};
use super::relay::{FormRelay, RelayError};
use super::validation::{validate, ContactInput, Field, ValidContact, ValidationErrors};

pub const SUBMIT_LABEL: &str = "Send Inquiry";
pub const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Success,
    Rejected { reason: String },
    NetworkError { detail: String },
}

impl SubmissionOutcome {
    /// Classifies one relay round-trip.
    pub fn from_relay(result: Result<Value, RelayError>) -> Self {
        match result {
            Ok(payload) if payload.get("success").and_then(Value::as_bool) == Some(true) => {
                SubmissionOutcome::Success
            }
            Ok(payload) => SubmissionOutcome::Rejected {
                reason: payload
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("relay declined the submission")
                    .to_string(),
            },
            // Nothing was sent: a deployment problem, reported like a refusal.
            Err(RelayError::MissingAccessKey) => SubmissionOutcome::Rejected {
                reason: RelayError::MissingAccessKey.to_string(),
            },
            Err(e) => SubmissionOutcome::NetworkError {
                detail: e.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

#[derive(Debug, Default)]
struct FormInner {
    values: ContactInput,
    phase: FormPhase,
    errors: ValidationErrors,
    last_outcome: Option<SubmissionOutcome>,
}

/// One mounted contact form. Dropping it unmounts the form.
pub struct ContactForm {
    inner: Arc<Mutex<FormInner>>,
    relay: Arc<dyn FormRelay>,
    toaster: Toaster,
}

pub enum SubmitAttempt {
    /// Validation failed; nothing was sent.
    Blocked(ValidationErrors),
    /// A submission is already in flight.
    Busy,
    Started(PendingSubmission),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitReport {
    Blocked { errors: ValidationErrors },
    Busy,
    Completed(SubmissionOutcome),
    /// The form was unmounted while the request was in flight.
    Detached,
}

impl ContactForm {
    pub fn new(relay: Arc<dyn FormRelay>, toaster: Toaster) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FormInner::default())),
            relay,
            toaster,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormInner> {
        lock(&self.inner)
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let mut inner = self.lock();
        match field {
            Field::Name => inner.values.name = value,
            Field::Email => inner.values.email = value,
            Field::Message => inner.values.message = value,
        }
    }

    pub fn set_values(&self, values: ContactInput) {
        self.lock().values = values;
    }

    pub fn values(&self) -> ContactInput {
        self.lock().values.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.lock().errors.clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.lock().phase
    }

    pub fn last_outcome(&self) -> Option<SubmissionOutcome> {
        self.lock().last_outcome.clone()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.phase() != FormPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submit_enabled() {
            SUBMIT_LABEL
        } else {
            SUBMITTING_LABEL
        }
    }

    /// Validates the current values and, if they pass, moves to `Submitting`
    /// and returns the request still to be performed.
    pub fn begin_submit(&self) -> SubmitAttempt {
        let mut inner = self.lock();
        if inner.phase == FormPhase::Submitting {
            debug!("submit ignored: a submission is already in flight");
            return SubmitAttempt::Busy;
        }

        inner.phase = FormPhase::Validating;
        match validate(&inner.values) {
            Err(errors) => {
                debug!(fields = errors.len(), "contact form failed validation");
                inner.errors = errors.clone();
                inner.phase = FormPhase::Idle;
                SubmitAttempt::Blocked(errors)
            }
            Ok(contact) => {
                inner.errors = ValidationErrors::default();
                inner.phase = FormPhase::Submitting;
                SubmitAttempt::Started(PendingSubmission {
                    form: Arc::downgrade(&self.inner),
                    relay: self.relay.clone(),
                    toaster: self.toaster.clone(),
                    contact,
                    finished: false,
                })
            }
        }
    }

    /// Full submit: validate, send once, report.
    pub async fn submit(&self) -> SubmitReport {
        match self.begin_submit() {
            SubmitAttempt::Blocked(errors) => SubmitReport::Blocked { errors },
            SubmitAttempt::Busy => SubmitReport::Busy,
            SubmitAttempt::Started(pending) => match pending.run().await {
                Some(outcome) => SubmitReport::Completed(outcome),
                None => SubmitReport::Detached,
            },
        }
    }
}

fn lock(inner: &Mutex<FormInner>) -> MutexGuard<'_, FormInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A validated submission waiting to be sent. Dropping it unsent returns the
/// form to `Idle`.
pub struct PendingSubmission {
    form: Weak<Mutex<FormInner>>,
    relay: Arc<dyn FormRelay>,
    toaster: Toaster,
    contact: ValidContact,
    finished: bool,
}

impl PendingSubmission {
    /// Performs the single relay call. Returns `None` when the form was
    /// unmounted before the reply arrived.
    pub async fn run(mut self) -> Option<SubmissionOutcome> {
        let result = self.relay.relay(&self.contact).await;
        self.finished = true;

        let Some(form) = self.form.upgrade() else {
            debug!("contact form unmounted mid-submission; discarding result");
            return None;
        };

        match &result {
            Ok(payload) if payload.get("success").and_then(Value::as_bool) == Some(true) => {}
            Ok(payload) => error!("Error submitting form: {payload}"),
            Err(RelayError::MissingAccessKey) => {
                error!("Form submission misconfigured: {}", RelayError::MissingAccessKey)
            }
            Err(e) => error!("Form submission error: {e}"),
        }
        let outcome = SubmissionOutcome::from_relay(result);

        {
            let mut inner = lock(&form);
            if outcome.is_success() {
                inner.values = ContactInput::default();
            }
            inner.phase = FormPhase::Idle;
            inner.last_outcome = Some(outcome.clone());
        }

        if outcome.is_success() {
            info!("contact form delivered");
            self.toaster.show(Toast::sent());
        } else {
            self.toaster.show(Toast::failed());
        }

        Some(outcome)
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Some(form) = self.form.upgrade() {
            let mut inner = lock(&form);
            if inner.phase == FormPhase::Submitting {
                inner.phase = FormPhase::Idle;
            }
        }
    }
}
