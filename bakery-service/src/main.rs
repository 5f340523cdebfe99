use bakery_service::config::BakeryConfig;
use bakery_service::services::init_metrics;
use bakery_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT")
        .ok()
        .filter(|v| !v.is_empty());
    init_tracing("bakery-service", "info", otlp_endpoint.as_deref());

    init_metrics();

    let config = BakeryConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
