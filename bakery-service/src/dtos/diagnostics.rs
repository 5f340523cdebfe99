use serde::{Deserialize, Serialize};

/// Body of `GET /test`.
///
/// Every field is a human-readable status string; the report is meant for
/// people checking a deployment, not for machines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsReport {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}
