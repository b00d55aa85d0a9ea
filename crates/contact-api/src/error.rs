//! Error types for contact-api

use thiserror::Error;

/// Result type alias for contact-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the service from starting or serving.
///
/// Per-request failures are [`IntakeError`](crate::IntakeError) and never
/// surface here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from contact-store
    #[error("Storage error: {0}")]
    Storage(#[from] contact_store::StoreError),

    /// Binding or serving the listener failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
