//! Store lifecycle: opened once before the listener binds, closed after the
//! server drains.

use std::sync::Arc;

use contact_store::{MemoryStore, MongoStore, SubmissionStore};

use crate::{Config, Result, StoreKind};

/// The process-wide store connection.
#[derive(Clone, Debug)]
pub enum StoreHandle {
    /// MongoDB client.
    Mongo(Arc<MongoStore>),
    /// In-process store.
    Memory(Arc<MemoryStore>),
}

impl StoreHandle {
    /// Open the configured backend.
    ///
    /// An unreachable MongoDB is an error here; the caller must not start
    /// serving without a store.
    pub async fn open(config: &Config) -> Result<Self> {
        match config.store {
            StoreKind::Mongo => {
                let store = MongoStore::connect(&config.mongodb_uri).await?;
                Ok(Self::Mongo(Arc::new(store)))
            }
            StoreKind::Memory => {
                tracing::warn!("using in-memory store; submissions are lost on exit");
                Ok(Self::Memory(Arc::new(MemoryStore::new())))
            }
        }
    }

    /// The store as a trait object for the intake service.
    pub fn store(&self) -> Arc<dyn SubmissionStore> {
        match self {
            Self::Mongo(store) => store.clone(),
            Self::Memory(store) => store.clone(),
        }
    }

    /// Release the connection.
    pub async fn close(self) {
        match self {
            Self::Mongo(store) => store.shutdown().await,
            Self::Memory(store) => {
                tracing::info!(records = store.len().await, "in-memory store dropped");
            }
        }
    }
}
