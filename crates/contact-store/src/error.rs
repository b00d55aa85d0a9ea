//! Error types for contact-store

use thiserror::Error;

/// Result type alias for contact-store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a submission store.
///
/// All of them are server-side faults from the caller's point of view.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    /// Could not reach or authenticate against the backend at startup.
    #[error("failed to connect to {backend} store: {message}")]
    Connect {
        /// Backend name
        backend: &'static str,
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A record reached the store with a blank required field.
    #[error("schema violation: {field} is required")]
    Schema {
        /// Field that failed the check
        field: &'static str,
    },

    /// The backend rejected or failed the write.
    #[error("{backend} insert failed: {message}")]
    Backend {
        /// Backend name
        backend: &'static str,
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Creates a connection error with a source.
    pub fn connect<E>(backend: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Connect {
            backend,
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a write error with a source.
    pub fn backend<E>(backend: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend {
            backend,
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a write error from a message alone.
    pub fn backend_message<S: Into<String>>(backend: &'static str, message: S) -> Self {
        StoreError::Backend {
            backend,
            message: message.into(),
            source: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_schema_display() {
        let err = StoreError::Schema { field: "message" };
        assert_eq!(err.to_string(), "schema violation: message is required");
    }

    #[test]
    fn test_connect_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StoreError::connect("mongodb", io);
        assert_eq!(err.to_string(), "failed to connect to mongodb store: refused");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_backend_message_has_no_source() {
        let err = StoreError::backend_message("memory", "injected failure");
        assert_eq!(err.to_string(), "memory insert failed: injected failure");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }
}
