use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use aiven_broker_provider::aiven::AIVEN_BASE_URL;

#[derive(Clone)]
pub struct ServerConfig {
    pub broker_config_path: PathBuf,
    /// Falls back to `api_token` in the broker config when unset
    pub aiven_api_token: Option<String>,
    pub aiven_api_url: String,
    pub broker_username: String,
    pub broker_password: String,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("broker_config_path", &self.broker_config_path)
            .field("aiven_api_url", &self.aiven_api_url)
            .field("broker_username", &self.broker_username)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let timeout_seconds: u64 = std::env::var("BROKER_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .context("BROKER_REQUEST_TIMEOUT_SECONDS must be a number of seconds")?;

        Ok(Self {
            broker_config_path: std::env::var("BROKER_CONFIG")
                .context("BROKER_CONFIG must be set")?
                .into(),
            aiven_api_token: non_empty_env("AIVEN_API_TOKEN"),
            aiven_api_url: std::env::var("AIVEN_API_URL")
                .unwrap_or_else(|_| AIVEN_BASE_URL.to_string()),
            broker_username: std::env::var("BROKER_USERNAME")
                .context("BROKER_USERNAME must be set")?,
            broker_password: std::env::var("BROKER_PASSWORD")
                .context("BROKER_PASSWORD must be set")?,
            request_timeout: Duration::from_secs(timeout_seconds),
        })
    }
}

/// Read an environment variable, treating an empty value as unset
fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
