//! In-process submission store.
//!
//! Backs the test suites and `--store memory` local runs. Records live for
//! the life of the process. [`MemoryStore::fail_inserts`] simulates a store
//! outage.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use contact_core::Submission;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{Result, StoreError, SubmissionStore, ensure_schema};

const BACKEND: &str = "memory";

/// A submission together with the id the store gave it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredSubmission {
    /// Store-assigned record id.
    pub id: Uuid,
    /// The persisted submission.
    pub submission: Submission,
}

/// `Vec`-backed [`SubmissionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<StoredSubmission>>,
    failing: AtomicBool,
    attempts: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent insert fail (or succeed again).
    pub fn fail_inserts(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of times `insert` was called, successful or not.
    pub fn insert_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Snapshot of all persisted records, oldest first.
    pub async fn records(&self) -> Vec<StoredSubmission> {
        self.records.read().await.clone()
    }

    /// Number of persisted records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether nothing has been persisted.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    fn name(&self) -> &'static str {
        BACKEND
    }

    async fn insert(&self, submission: Submission) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::backend_message(BACKEND, "store unavailable"));
        }
        ensure_schema(&submission)?;

        let id = Uuid::new_v4();
        self.records
            .write()
            .await
            .push(StoredSubmission { id, submission });
        tracing::trace!(%id, "memory store insert");
        Ok(())
    }
}
