//! The intake pipeline: validate, persist, report.

use std::sync::Arc;

use contact_core::{Clock, ContactPayload, Submission, SystemClock, ValidationOptions};
use contact_store::{StoreError, SubmissionStore};
use thiserror::Error;

/// Why a submission was not accepted.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// The caller sent an incomplete or unreadable payload.
    #[error(transparent)]
    Validation(#[from] contact_core::Error),

    /// The store could not persist a valid submission.
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl IntakeError {
    /// Whether the caller caused this error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, IntakeError::Validation(_))
    }
}

/// Validates contact payloads and hands them to a [`SubmissionStore`].
///
/// Stateless apart from its injected collaborators: concurrent calls do not
/// coordinate, and a failed insert is reported immediately, never retried.
pub struct IntakeService {
    store: Arc<dyn SubmissionStore>,
    clock: Arc<dyn Clock>,
    options: ValidationOptions,
}

impl IntakeService {
    /// Service over `store` using the system clock and lenient validation.
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            options: ValidationOptions::default(),
        }
    }

    /// Replace the time source for `createdAt`.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the validation settings.
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate `payload` and store it as a new submission.
    ///
    /// The store is only called when validation passes, and then exactly
    /// once.
    pub async fn submit_contact(&self, payload: ContactPayload) -> Result<(), IntakeError> {
        let submission = match Submission::from_payload(payload, self.clock.now(), &self.options) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "contact submission rejected");
                return Err(e.into());
            }
        };

        match self.store.insert(submission).await {
            Ok(()) => {
                tracing::info!(store = self.store.name(), "contact submission stored");
                Ok(())
            }
            Err(e) => {
                tracing::error!(store = self.store.name(), error = %e, "error saving contact form");
                Err(e.into())
            }
        }
    }
}
