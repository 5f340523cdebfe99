use super::store::{id_to_string, DocumentStore};
use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use service_core::error::AppError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-process document store.
///
/// Assigns ObjectIds like MongoDB does and keeps insertion order. Can be put
/// into a failing state to simulate a broken connection.
pub struct MemoryStore {
    name: String,
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    collections: BTreeMap<String, Vec<Document>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Make every subsequent operation fail with `message`.
    pub async fn fail_with(&self, message: impl Into<String>) {
        self.inner.write().await.failure = Some(message.into());
    }

    async fn check(&self) -> Result<(), AppError> {
        match &self.inner.read().await.failure {
            Some(message) => Err(AppError::DatabaseError(anyhow::anyhow!(message.clone()))),
            None => Ok(()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, collection: &str, mut document: Document) -> Result<String, AppError> {
        self.check().await?;
        if !document.contains_key("_id") {
            document.insert("_id", ObjectId::new());
        }
        let id = document
            .get("_id")
            .map(id_to_string)
            .unwrap_or_default();

        self.inner
            .write()
            .await
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        self.check().await?;
        Ok(self
            .inner
            .read()
            .await
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn count(&self, collection: &str) -> Result<u64, AppError> {
        self.check().await?;
        Ok(self
            .inner
            .read()
            .await
            .collections
            .get(collection)
            .map_or(0, |docs| docs.len() as u64))
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.check().await?;
        Ok(self.inner.read().await.collections.keys().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check().await
    }
}
