//! Contact Core — shared types for the contact intake pipeline.
//!
//! This crate has no internal dependencies (dependency level 0). It defines
//! what a contact submission *is*; storing it and serving it over HTTP live
//! in `contact-store` and `contact-api`.
//!
//! # Modules
//!
//! - [`payload`]: the loosely-typed wire shape posted by the contact form
//! - [`submission`]: the validated [`Submission`] record
//! - [`clock`]: server-side time source for `createdAt`
//! - [`error`]: validation errors and Result alias

pub mod clock;
pub mod error;
pub mod payload;
pub mod submission;

mod proptests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use payload::ContactPayload;
pub use submission::{Submission, ValidationOptions};
