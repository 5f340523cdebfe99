use crate::dtos::{ProductOut, SeedResponse};
use crate::models::PRODUCT_COLLECTION;
use crate::services::{record_seed, seed_catalog};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Insert the demo catalog if no products exist yet.
#[tracing::instrument(skip(state))]
pub async fn seed_products(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let store = state.store.require()?;
    let outcome = seed_catalog(store.as_ref()).await?;
    record_seed(outcome.inserted);

    Ok(Json(SeedResponse {
        inserted: outcome.inserted,
        message: outcome
            .already_seeded
            .then(|| "Products already exist".to_string()),
    }))
}

#[tracing::instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductOut>>, AppError> {
    let store = state.store.require()?;
    let docs = store.find_all(PRODUCT_COLLECTION).await?;

    tracing::debug!(count = docs.len(), "Listing products");
    Ok(Json(docs.iter().map(ProductOut::from_document).collect()))
}
