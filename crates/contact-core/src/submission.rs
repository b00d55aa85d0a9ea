//! The validated contact submission.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{ContactPayload, Error, Result};

/// Same shape the contact page checks before posting.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Knobs for [`Submission::from_payload`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject emails that do not look like `local@domain.tld`.
    ///
    /// Off by default: the server only requires a non-blank value.
    pub strict_email: bool,
}

/// A contact-form entry that passed validation.
///
/// The only way to build one from client input is
/// [`Submission::from_payload`], so a `Submission` in hand always has a
/// non-blank name, email and message, and a server-assigned `created_at`.
/// Values are kept exactly as the client sent them.
///
/// `Deserialize` does not validate. A record read back from storage or a
/// fixture may carry blank required fields; check it with
/// [`Submission::missing_required`] before trusting it. Every store does so
/// on insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    message: String,
    created_at: DateTime<Utc>,
}

impl Submission {
    /// Validate `payload` and stamp it with `created_at`.
    ///
    /// Checks run in order name, email, message and stop at the first
    /// failure.
    pub fn from_payload(
        payload: ContactPayload,
        created_at: DateTime<Utc>,
        options: &ValidationOptions,
    ) -> Result<Self> {
        let ContactPayload {
            name,
            email,
            phone,
            subject,
            message,
        } = payload;

        let name = required("name", name)?;
        let email = required("email", email)?;
        if options.strict_email && !looks_like_email(&email) {
            return Err(Error::InvalidEmail);
        }
        let message = required("message", message)?;

        Ok(Self {
            name,
            email,
            phone,
            subject,
            message,
            created_at,
        })
    }

    /// Sender's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number, if given.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Subject line, if given.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Server-side creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// First required field that is blank, if any.
    ///
    /// Always `None` for values built by [`Submission::from_payload`];
    /// deserialized records skip validation, so stores re-check with this.
    pub fn missing_required(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !is_blank(&value) => Ok(value),
        _ => Err(Error::missing(field)),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn looks_like_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}
