//! Error types for contact-core

use thiserror::Error;

/// Result type alias for contact-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a contact payload is rejected.
///
/// Every variant is a client-side validation failure; callers are expected
/// to surface them all the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A required field was absent, null, or blank.
    #[error("Validation error: {field} is required")]
    MissingField {
        /// Wire name of the missing field
        field: &'static str,
    },

    /// The email address failed the optional format check.
    #[error("Validation error: email is not a valid address")]
    InvalidEmail,

    /// The request body could not be read as a contact payload.
    #[error("Validation error: malformed payload: {message}")]
    MalformedPayload {
        /// What the body parser reported
        message: String,
    },
}

impl Error {
    /// Creates a new missing-field error.
    pub fn missing(field: &'static str) -> Self {
        Error::MissingField { field }
    }

    /// Creates a new malformed-payload error.
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Error::MalformedPayload {
            message: message.into(),
        }
    }

    /// The offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::MissingField { field } => Some(field),
            Error::InvalidEmail => Some("email"),
            Error::MalformedPayload { .. } => None,
        }
    }
}
