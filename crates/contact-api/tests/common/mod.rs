//! Shared harness for the contact-api integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use contact_api::{AppState, IntakeService, router};
use contact_core::{Clock, ValidationOptions};
use contact_store::MemoryStore;
use serde_json::Value;
use tower::ServiceExt;

/// Router wired to an inspectable in-memory store.
pub struct TestHarness {
    /// Store behind the router
    pub store: Arc<MemoryStore>,
    /// Application under test
    pub app: Router,
}

impl TestHarness {
    /// Harness with the system clock and lenient validation.
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let app = router(AppState::new(IntakeService::new(store.clone())));
        Self { store, app }
    }

    /// Harness with a custom clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let intake = IntakeService::new(store.clone()).with_clock(clock);
        Self {
            app: router(AppState::new(intake)),
            store,
        }
    }

    /// Harness with custom validation settings.
    pub fn with_options(options: ValidationOptions) -> Self {
        let store = Arc::new(MemoryStore::new());
        let intake = IntakeService::new(store.clone()).with_options(options);
        Self {
            app: router(AppState::new(intake)),
            store,
        }
    }

    /// POST a JSON value to `/api/contact`.
    pub async fn post_contact(&self, body: &Value) -> (StatusCode, Value) {
        self.post_raw(&body.to_string()).await
    }

    /// POST a raw string with a JSON content type to `/api/contact`.
    pub async fn post_raw(&self, body: &str) -> (StatusCode, Value) {
        let req = Request::post("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(self.app.clone(), req).await
    }

    /// GET `/api/health`.
    pub async fn health(&self) -> (StatusCode, Value) {
        let req = Request::get("/api/health").body(Body::empty()).unwrap();
        send(self.app.clone(), req).await
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
