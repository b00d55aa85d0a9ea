//! # contact-store
//!
//! Durable storage for contact submissions.
//!
//! This crate provides:
//! - [`SubmissionStore`], the insert-only storage abstraction
//! - [`MongoStore`], the production backend (one `contacts` collection)
//! - [`MemoryStore`], an in-process backend for tests and local runs
//!
//! Every backend runs [`ensure_schema`] before writing, so a record with a
//! blank required field never reaches storage.

pub mod error;
pub mod memory;
pub mod mongo;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::{MemoryStore, StoredSubmission};
pub use mongo::MongoStore;
pub use traits::{SubmissionStore, ensure_schema};
