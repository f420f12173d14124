mod config;
mod platform;
mod responder;
mod server;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::platform::messenger::SendApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hestia_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    info!("Loading configuration from: {}", config_path.display());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    info!("Configuration loaded successfully");
    info!("  Listen address: {}", config.bind_addr());
    info!("  Graph API: {}/{}", config.messenger.graph_api_url, config.messenger.api_version);
    if config.messenger.page_access_token.is_some() {
        info!("  Page access token is set");
    } else {
        error!("Page access token is NOT set; the bot will not be able to send messages");
    }

    let sender = Arc::new(SendApiClient::new(config.messenger.clone()));

    info!("Bot is starting...");
    server::serve(&config, sender).await?;

    Ok(())
}
