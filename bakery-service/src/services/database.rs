use super::store::{id_to_string, DocumentStore, StoreHandle};
use crate::config::DatabaseConfig;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;
use std::time::Duration;

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// MongoDB-backed document store.
#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        options.app_name = Some("bakery-service".to_string());
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.db.name()
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<String, AppError> {
        let result = self
            .collection(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;
        Ok(id_to_string(&result.inserted_id))
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .collection(collection)
            .find(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query documents: {}", e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to collect documents: {}", e);
            AppError::from(e)
        })
    }

    async fn count(&self, collection: &str) -> Result<u64, AppError> {
        self.collection(collection)
            .count_documents(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to count documents: {}", e);
                AppError::from(e)
            })
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db.list_collection_names(None).await.map_err(|e| {
            tracing::warn!("Failed to list collections: {}", e);
            AppError::from(e)
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}

/// Build the store handle from configuration.
///
/// Never fails: a missing URL yields [`StoreHandle::NotConfigured`] and a
/// client that cannot be built yields [`StoreHandle::Uninitialized`].
pub async fn connect_store(config: &DatabaseConfig) -> StoreHandle {
    let Some(url) = config.url.as_deref() else {
        tracing::warn!("DATABASE_URL is not set; running without a document store");
        return StoreHandle::NotConfigured;
    };

    match MongoStore::connect(url, config.database_name()).await {
        Ok(store) => StoreHandle::connected(store),
        Err(e) => {
            tracing::warn!("Document store unavailable, continuing without it: {}", e);
            StoreHandle::Uninitialized
        }
    }
}
