//! MongoDB submission store.
//!
//! Writes to the `contacts` collection of the database named in the
//! connection string (`innovatex` when the URI names none). Documents keep
//! the layout the site has always used:
//!
//! ```text
//! { _id, name, email, phone?, subject?, message, createdAt: Date, __v: 0 }
//! ```

use async_trait::async_trait;
use contact_core::Submission;
use mongodb::bson::{self, Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::{Result, StoreError, SubmissionStore, ensure_schema};

const BACKEND: &str = "mongodb";

/// Connection string used when none is configured.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017/innovatex";

/// Database used when the connection string names none.
pub const DEFAULT_DATABASE: &str = "innovatex";

/// Collection holding submissions.
pub const COLLECTION: &str = "contacts";

/// [`SubmissionStore`] over one long-lived MongoDB client.
///
/// The driver pools connections internally; one `MongoStore` is opened at
/// startup and shared by every request.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: String,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Parse `uri`, open a client, and ping the server.
    ///
    /// The ping makes an unreachable server a startup error instead of a
    /// failure on the first submission.
    pub async fn connect(uri: &str) -> Result<Self> {
        let options = ClientOptions::parse(uri)
            .await
            .map_err(|e| StoreError::connect(BACKEND, e))?;
        let database = options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let client = Client::with_options(options).map_err(|e| StoreError::connect(BACKEND, e))?;

        let db = client.database(&database);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::connect(BACKEND, e))?;

        tracing::info!(database = %database, collection = COLLECTION, "MongoDB connected");
        Ok(Self {
            collection: db.collection(COLLECTION),
            client,
            database,
        })
    }

    /// Name of the database in use.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Close the client once in-flight operations settle.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!(database = %self.database, "MongoDB connection closed");
    }
}

#[async_trait]
impl SubmissionStore for MongoStore {
    fn name(&self) -> &'static str {
        BACKEND
    }

    async fn insert(&self, submission: Submission) -> Result<()> {
        ensure_schema(&submission)?;
        let result = self
            .collection
            .insert_one(to_document(&submission))
            .await
            .map_err(|e| StoreError::backend(BACKEND, e))?;
        tracing::debug!(id = %result.inserted_id, "contact document inserted");
        Ok(())
    }
}

/// Map a submission onto its stored document. `_id` is left to the driver.
pub(crate) fn to_document(submission: &Submission) -> Document {
    let mut document = doc! {
        "name": submission.name(),
        "email": submission.email(),
    };
    if let Some(phone) = submission.phone() {
        document.insert("phone", phone);
    }
    if let Some(subject) = submission.subject() {
        document.insert("subject", subject);
    }
    document.insert("message", submission.message());
    document.insert(
        "createdAt",
        bson::DateTime::from_millis(submission.created_at().timestamp_millis()),
    );
    document.insert("__v", 0_i32);
    document
}
