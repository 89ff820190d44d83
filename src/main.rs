use anyhow::Result;
use std::sync::Arc;
use synapse_backend::{
    AppState, build_router, config::Settings, gateway::OllamaGateway, logging,
};
use tokio::net::TcpListener;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // a missing .env is the normal case
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    logging::init();

    let settings = Settings::from_env()?;
    info!(
        "Starting {} ({} environment)",
        settings.app_name, settings.environment
    );
    debug!("Dashboard data refresh interval: {}s", settings.data_refresh_seconds);

    let gateway = OllamaGateway::from_settings(&settings)?;
    info!("Using Ollama at {}", gateway.base_url());

    let listen_addr = settings.listen_addr.clone();
    let app = build_router(AppState::new(settings, Arc::new(gateway)));

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Server running on {listen_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
