//! # contact-api
//!
//! HTTP intake service for contact-form submissions.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  routes     POST /api/contact   GET /api/health          │
//! ├──────────────────────────────────────────────────────────┤
//! │  intake     IntakeService: validate → insert → respond   │
//! ├──────────────────────────────────────────────────────────┤
//! │  startup    StoreHandle: open at boot, close at shutdown │
//! ├──────────────────────────────────────────────────────────┤
//! │  contact-store   MongoStore | MemoryStore                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The health probe never touches the store, so it keeps answering during a
//! database outage.

pub mod config;
pub mod error;
pub mod intake;
pub mod logging;
pub mod response;
pub mod routes;
pub mod server;
pub mod startup;

pub use config::{Config, StoreKind};
pub use error::{Error, Result};
pub use intake::{IntakeError, IntakeService};
pub use routes::{AppState, router};
pub use server::{serve, shutdown_signal};
pub use startup::StoreHandle;
