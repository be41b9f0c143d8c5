//! Stateful side of the form: one instance per rendered form, sole owner
//! of the record/error-map/status triple. All mutation happens inside
//! discrete calls here; nothing else writes these three.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::{sleep, Duration};
use tracing::{info, warn};

use crate::gateway::{Delivery, SubmissionGateway};
use crate::models::{ErrorMap, Field, FormRecord, SubmissionStatus};
use crate::normalize::normalize;
use crate::validate::check;

/// How long the success banner stays up before status reverts to Idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

const REJECTED_MESSAGE: &str = "Failed to submit to Google Sheets";

pub struct ContactForm {
    record: FormRecord,
    errors: ErrorMap,
    status: SubmissionStatus,
    dismiss: Option<AbortHandle>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            record: FormRecord::default(),
            errors: ErrorMap::new(),
            status: SubmissionStatus::Idle,
            dismiss: None,
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Keystroke entry point: canonicalize, store, drop the field's stale
    /// error. Validation waits until submit.
    pub fn on_field_change(&mut self, field: Field, raw: &str) {
        let value = normalize(field, raw);
        self.record.set(field, value);
        self.errors.remove(&field);
    }

    fn fail(&mut self, message: String) {
        warn!("Submission failed: {message}");
        self.errors.clear();
        self.errors.insert(Field::Message, message);
        self.status = SubmissionStatus::Idle;
    }

    fn schedule_dismiss(&mut self, form: &Arc<Mutex<ContactForm>>) {
        if let Some(previous) = self.dismiss.take() {
            previous.abort();
        }

        // Weak so the timer never outlives the form it would mutate
        let weak = Arc::downgrade(form);
        let task = tokio::spawn(async move {
            sleep(SUCCESS_DISPLAY).await;
            if let Some(form) = weak.upgrade() {
                let mut form = form.lock().await;
                if form.status == SubmissionStatus::Succeeded {
                    form.status = SubmissionStatus::Idle;
                }
                form.dismiss = None;
            }
        });
        self.dismiss = Some(task.abort_handle());
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        if let Some(task) = self.dismiss.take() {
            task.abort();
        }
    }
}

/// Submit-click entry point.
///
/// Returns true only when the gateway took the record. The lock is not
/// held across the network call; `Pending` is the re-entrancy guard, and a
/// second call while one is in flight is ignored outright.
pub async fn submit<G: SubmissionGateway>(form: &Arc<Mutex<ContactForm>>, gateway: &G) -> bool {
    let record = {
        let mut form = form.lock().await;

        if form.status == SubmissionStatus::Pending {
            warn!("Submission already in flight, ignoring");
            return false;
        }

        let errors = check(&form.record);
        if !errors.is_empty() {
            form.errors = errors;
            form.status = SubmissionStatus::Idle;
            return false;
        }

        form.status = SubmissionStatus::Pending;
        form.record.clone()
    };

    let outcome = gateway.submit(&record).await;

    let mut guard = form.lock().await;
    match outcome {
        // Unknown is the webhook's normal answer, counted as success
        Ok(Delivery::Acknowledged) | Ok(Delivery::Unknown) => {
            info!("Application submitted");
            guard.record = FormRecord::default();
            guard.errors.clear();
            guard.status = SubmissionStatus::Succeeded;
            guard.schedule_dismiss(form);
            true
        }
        Ok(Delivery::Rejected) => {
            guard.fail(REJECTED_MESSAGE.to_string());
            false
        }
        Err(error) => {
            guard.fail(error.to_string());
            false
        }
    }
}
