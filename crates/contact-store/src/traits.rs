//! Storage abstraction.

use async_trait::async_trait;
use contact_core::Submission;

use crate::{Result, StoreError};

/// Insert-only store of contact submissions.
///
/// There is no read, update or delete. Implementations must be safe to
/// share across concurrent requests; each `insert` is atomic per record.
#[async_trait]
pub trait SubmissionStore: Send + Sync + 'static {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Persist one submission as a new record.
    ///
    /// Two identical submissions produce two records.
    async fn insert(&self, submission: Submission) -> Result<()>;
}

/// Schema check every backend runs before writing.
pub fn ensure_schema(submission: &Submission) -> Result<()> {
    match submission.missing_required() {
        Some(field) => Err(StoreError::Schema { field }),
        None => Ok(()),
    }
}
