use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub messenger: MessengerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MessengerConfig {
    /// Token the platform echoes back during the webhook handshake
    #[serde(default = "default_verify_token")]
    pub verify_token: String,
    /// Page access token for the Send API; sending is disabled without it
    #[serde(default)]
    pub page_access_token: Option<String>,
    #[serde(default = "default_graph_api_url")]
    pub graph_api_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    10000
}

fn default_verify_token() -> String {
    "sjcverify123".to_string()
}

fn default_graph_api_url() -> String {
    "https://graph.facebook.com".to_string()
}

fn default_api_version() -> String {
    "v19.0".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            verify_token: default_verify_token(),
            page_access_token: None,
            graph_api_url: default_graph_api_url(),
            api_version: default_api_version(),
        }
    }
}

impl Config {
    /// Address the webhook server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Load config from a TOML file, then apply process environment overrides.
    ///
    /// A missing file is fine: deployments often configure everything through
    /// `PORT`, `VERIFY_TOKEN` and `PAGE_ACCESS_TOKEN`.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Config file {} not found, using defaults and environment",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // An empty token in the file means "not set"
        if config
            .messenger
            .page_access_token
            .as_deref()
            .is_some_and(str::is_empty)
        {
            config.messenger.page_access_token = None;
        }

        info!("Loaded config file {}", path.display());
        Ok(config)
    }

    /// Override settings from `lookup` (the process environment in production).
    /// Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = get("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }
        if let Some(token) = get("VERIFY_TOKEN") {
            self.messenger.verify_token = token;
        }
        if let Some(token) = get("PAGE_ACCESS_TOKEN") {
            self.messenger.page_access_token = Some(token);
        }

        Ok(())
    }
}
