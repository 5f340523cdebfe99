use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RootMessage {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub inserted: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactAck {
    pub ok: bool,
}
