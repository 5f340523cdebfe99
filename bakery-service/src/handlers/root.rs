use crate::dtos::RootMessage;
use axum::Json;

pub async fn read_root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Bakery API is running".to_string(),
    })
}
