//! Bakery storefront API.
//!
//! Product listing, demo catalog seeding, contact-form intake and store
//! diagnostics over HTTP, backed by a document store.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

pub use startup::{build_router, AppState, Application};
