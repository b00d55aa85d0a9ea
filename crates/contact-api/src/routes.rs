//! HTTP routes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use contact_core::ContactPayload;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::intake::{IntakeError, IntakeService};
use crate::response::{ContactResponse, HealthResponse};

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    intake: Arc<IntakeService>,
}

impl AppState {
    /// Wrap an intake service for sharing across handlers.
    pub fn new(intake: IntakeService) -> Self {
        Self {
            intake: Arc::new(intake),
        }
    }
}

/// Build the application router.
///
/// Mounts:
/// - `POST /api/contact`
/// - `GET /api/health`
///
/// CORS is open to any origin; the site and API are deployed separately.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return rejection.into_response();
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "unreadable contact payload");
            let err = contact_core::Error::malformed(rejection.body_text());
            return IntakeError::from(err).into_response();
        }
    };

    match state.intake.submit_contact(payload).await {
        Ok(()) => (StatusCode::CREATED, Json(ContactResponse::sent())).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::operational())
}
