use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load the common configuration.
    ///
    /// Sources, lowest precedence first: an optional `configuration` file,
    /// `APP__*` environment variables, and finally a bare `PORT` variable as
    /// set by most hosting platforms.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let port = std::env::var("PORT")
            .ok()
            .map(|p| {
                p.parse::<u16>().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!("PORT must be a valid port: {}", e))
                })
            })
            .transpose()?;

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port.map(i64::from))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
