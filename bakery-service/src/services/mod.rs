pub mod catalog;
pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use catalog::{demo_products, seed_catalog, SeedOutcome};
pub use database::{connect_store, MongoStore};
pub use memory::MemoryStore;
pub use metrics::{get_metrics, init_metrics, record_contact_message, record_seed};
pub use store::{id_to_string, DocumentStore, StoreHandle};
