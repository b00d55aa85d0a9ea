//! Response bodies and the HTTP mapping of [`IntakeError`].
//!
//! The client only ever sees the fixed messages below; store errors are
//! logged by the intake service and never echoed.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::IntakeError;

/// Acknowledgment for an accepted submission.
pub const MESSAGE_SENT: &str = "Message sent successfully";

/// Reply to any client-side validation failure.
pub const MESSAGE_MISSING_FIELDS: &str = "Please provide name, email, and message";

/// Reply to any persistence failure.
pub const MESSAGE_SERVER_ERROR: &str = "Server error";

/// Body of every `/api/contact` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Whether the submission was stored.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl ContactResponse {
    /// Submission stored.
    pub fn sent() -> Self {
        Self {
            success: true,
            message: MESSAGE_SENT.to_string(),
        }
    }

    /// Submission rejected or not stored.
    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Body of `/api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"OK"` while the process is serving.
    pub status: String,
    /// Human-readable status.
    pub message: String,
}

impl HealthResponse {
    /// The fixed liveness answer.
    pub fn operational() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Server is running".to_string(),
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            IntakeError::Validation(_) => (StatusCode::BAD_REQUEST, MESSAGE_MISSING_FIELDS),
            IntakeError::Persistence(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, MESSAGE_SERVER_ERROR)
            }
        };
        (status, Json(ContactResponse::failed(message))).into_response()
    }
}
