//! Document store abstraction.
//!
//! Handlers never talk to a driver directly: they receive a [`StoreHandle`]
//! through application state and ask it for a [`DocumentStore`].

use async_trait::async_trait;
use bson::{Bson, Document};
use service_core::error::AppError;
use std::sync::Arc;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the backing database.
    fn name(&self) -> &str;

    /// Insert a document and return the store-assigned id as a string.
    async fn insert(&self, collection: &str, document: Document) -> Result<String, AppError>;

    /// All documents of a collection in store order. Absent collections are empty.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError>;

    async fn count(&self, collection: &str) -> Result<u64, AppError>;

    async fn collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// Connection state of the document store, fixed at startup.
#[derive(Clone)]
pub enum StoreHandle {
    Connected(Arc<dyn DocumentStore>),
    /// A database URL was configured but no client could be built from it.
    Uninitialized,
    /// No database URL was configured.
    NotConfigured,
}

impl StoreHandle {
    pub fn connected(store: impl DocumentStore + 'static) -> Self {
        StoreHandle::Connected(Arc::new(store))
    }

    pub fn get(&self) -> Option<&Arc<dyn DocumentStore>> {
        match self {
            StoreHandle::Connected(store) => Some(store),
            StoreHandle::Uninitialized | StoreHandle::NotConfigured => None,
        }
    }

    /// The store, or a server error for requests that cannot work without one.
    pub fn require(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        self.get().ok_or_else(|| {
            tracing::warn!("Document store requested but not available");
            AppError::DatabaseError(anyhow::anyhow!("Database not available"))
        })
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreHandle::Connected(store) => f.debug_tuple("Connected").field(&store.name()).finish(),
            StoreHandle::Uninitialized => f.write_str("Uninitialized"),
            StoreHandle::NotConfigured => f.write_str("NotConfigured"),
        }
    }
}

/// Render a store identifier in its outward string form.
///
/// ObjectIds become their 24-char hex form and strings pass through; any other
/// value uses its bson display form.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
