use crate::dtos::DiagnosticsReport;
use crate::services::StoreHandle;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

const ERROR_PREVIEW_CHARS: usize = 50;
const MAX_LISTED_COLLECTIONS: usize = 10;

/// Report backend and document store status.
///
/// Always answers 200: store failures are summarized into the report instead
/// of being returned as errors.
///
/// A missing `DATABASE_URL` reports "❌ Not Available"; only a configured URL
/// whose client could not be built reports "Available but not initialized".
#[tracing::instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport::default();

    match &state.store {
        StoreHandle::Connected(store) => {
            report.database = "✅ Available".to_string();
            report.connection_status = "Connected".to_string();

            match store.collection_names().await {
                Ok(names) => {
                    report.collections = names.into_iter().take(MAX_LISTED_COLLECTIONS).collect();
                    report.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    tracing::warn!("Store diagnostics failed: {}", e);
                    report.database = format!("⚠️  Connected but Error: {}", preview(&e));
                }
            }
        }
        StoreHandle::Uninitialized => {
            report.database = "⚠️  Available but not initialized".to_string();
        }
        StoreHandle::NotConfigured => {}
    }

    let database = &state.config.database;
    report.database_url = Some(set_marker(database.url_is_set()));
    report.database_name = Some(set_marker(database.name_is_set()));

    Json(report)
}

fn set_marker(is_set: bool) -> String {
    let marker = if is_set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn preview(err: &AppError) -> String {
    let message = match err {
        AppError::DatabaseError(inner) => inner.to_string(),
        other => other.to_string(),
    };
    message.chars().take(ERROR_PREVIEW_CHARS).collect()
}
