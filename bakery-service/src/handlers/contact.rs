use crate::dtos::ContactAck;
use crate::models::{ContactMessage, CONTACT_COLLECTION};
use crate::services::record_contact_message;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{extract::State, Json};
use service_core::error::AppError;

#[tracing::instrument(skip(state, message))]
pub async fn send_contact(
    State(state): State<AppState>,
    ValidatedJson(message): ValidatedJson<ContactMessage>,
) -> Result<Json<ContactAck>, AppError> {
    let store = state.store.require()?;
    let id = store
        .insert(CONTACT_COLLECTION, bson::to_document(&message)?)
        .await?;

    record_contact_message();
    tracing::info!(id = %id, "Contact message stored");

    Ok(Json(ContactAck { ok: true }))
}
