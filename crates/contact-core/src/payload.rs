//! Wire shape of a contact-form post.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact` as the client sent it.
///
/// Every field is optional here; [`Submission::from_payload`] decides what
/// is actually required. Unknown keys (a client-supplied `createdAt`, for
/// instance) are dropped during deserialization.
///
/// [`Submission::from_payload`]: crate::Submission::from_payload
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    /// Sender's name.
    #[serde(default)]
    pub name: Option<String>,
    /// Sender's email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Optional subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// Message body.
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactPayload {
    /// Payload carrying only the three required fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}
