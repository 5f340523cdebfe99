use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_DATABASE_NAME: &str = "bakery";

#[derive(Debug, Clone, Deserialize)]
pub struct BakeryConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
}

/// Document store settings.
///
/// Both values are optional. A missing URL leaves the service running
/// without a store; handlers that need one answer with a server error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: non_empty_env("DATABASE_URL"),
            name: non_empty_env("DATABASE_NAME"),
        }
    }

    pub fn database_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DATABASE_NAME)
    }

    pub fn url_is_set(&self) -> bool {
        self.url.is_some()
    }

    pub fn name_is_set(&self) -> bool {
        self.name.is_some()
    }
}

impl BakeryConfig {
    pub fn load() -> Result<Self, AppError> {
        // Loads .env as a side effect, so read the service variables after it.
        let common_config = core_config::Config::load()?;

        Ok(BakeryConfig {
            common: common_config,
            database: DatabaseConfig::from_env(),
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_name_falls_back_to_default() {
        let config = DatabaseConfig {
            url: Some("mongodb://localhost:27017".to_string()),
            name: None,
        };
        assert_eq!(config.database_name(), DEFAULT_DATABASE_NAME);
        assert!(config.url_is_set());
        assert!(!config.name_is_set());
    }

    #[test]
    fn explicit_database_name_wins() {
        let config = DatabaseConfig {
            url: None,
            name: Some("storefront".to_string()),
        };
        assert_eq!(config.database_name(), "storefront");
    }
}
