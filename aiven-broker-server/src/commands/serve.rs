use anyhow::{Context, Result};
use std::sync::Arc;

use aiven_broker_provider::{AivenProvider, Config, EnvIpWhitelist, HttpAivenClient};

use crate::api::{self, AppState};
use crate::auth::BasicAuth;
use crate::config::ServerConfig;

pub async fn run_serve(port: u16) -> Result<()> {
    tracing::info!("Starting Aiven broker");

    let server_config = ServerConfig::load()?;
    tracing::debug!("Server config: {:?}", server_config);

    let config = Config::load(&server_config.broker_config_path).with_context(|| {
        format!(
            "Failed to load broker config from {}",
            server_config.broker_config_path.display()
        )
    })?;

    let token = server_config
        .aiven_api_token
        .clone()
        .or_else(|| config.api_token.clone())
        .context("AIVEN_API_TOKEN must be set (or api_token in the broker config)")?;

    let client = HttpAivenClient::new(
        &server_config.aiven_api_url,
        token,
        &config.project,
        server_config.request_timeout,
    )
    .context("Failed to create Aiven client")?;

    tracing::info!(
        "✓ Loaded catalog with {} service(s) for project {} in {}",
        config.catalog.services.len(),
        config.project,
        config.cloud
    );

    let provider = AivenProvider::new(Arc::new(client), Arc::new(config), Arc::new(EnvIpWhitelist));

    let state = AppState {
        provider,
        auth: BasicAuth::new(server_config.broker_username, server_config.broker_password),
        request_timeout: server_config.request_timeout,
    };

    api::start_server(port, state).await
}
