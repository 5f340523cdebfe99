//! Test helpers for bakery-service integration tests.

#![allow(dead_code)]

use bakery_service::config::{BakeryConfig, DatabaseConfig};
use bakery_service::services::{DocumentStore, MemoryStore, StoreHandle};
use bakery_service::startup::Application;
use service_core::config::Config;
use std::sync::Arc;

/// Running application bound to a random port.
pub struct TestApp {
    pub address: String,
    pub store: Option<Arc<MemoryStore>>,
    client: reqwest::Client,
}

pub fn test_config(url: Option<&str>, name: Option<&str>) -> BakeryConfig {
    BakeryConfig {
        common: Config { port: 0 },
        database: DatabaseConfig {
            url: url.map(str::to_string),
            name: name.map(str::to_string),
        },
    }
}

impl TestApp {
    /// Spawn the application backed by a fresh in-memory store.
    pub async fn spawn() -> Self {
        let store = Arc::new(MemoryStore::new("bakery_test"));
        let handle = StoreHandle::Connected(store.clone() as Arc<dyn DocumentStore>);
        let config = test_config(Some("mongodb://localhost:27017"), Some("bakery_test"));

        let mut app = Self::spawn_with(config, handle).await;
        app.store = Some(store);
        app
    }

    /// Spawn the application with an explicit store state.
    pub async fn spawn_with(config: BakeryConfig, handle: StoreHandle) -> Self {
        let app = Application::with_store(config, handle)
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(app.run_until_stopped());

        Self {
            address,
            store: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn memory_store(&self) -> &MemoryStore {
        self.store.as_deref().expect("App was not spawned with a memory store")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
