//! Aiven Broker Provider - lifecycle adapter between a service marketplace and the Aiven API
//!
//! This crate translates marketplace lifecycle requests (provision, deprovision,
//! bind, unbind, update, last-operation) into Aiven service calls and maps the
//! vendor's service states back onto the marketplace's tri-state outcome.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aiven_broker_provider::{
//!     AivenProvider, Config, EnvIpWhitelist, HttpAivenClient, ProvisionData, RequestContext,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load("broker.json")?;
//! let client = HttpAivenClient::new(
//!     "https://api.aiven.io",
//!     "api-token",
//!     &config.project,
//!     std::time::Duration::from_secs(30),
//! )?;
//! let provider = AivenProvider::new(Arc::new(client), Arc::new(config), Arc::new(EnvIpWhitelist));
//!
//! let ctx = RequestContext::with_timeout(std::time::Duration::from_secs(60));
//! provider
//!     .provision(&ctx, ProvisionData {
//!         instance_id: "abc-123".to_string(),
//!         service_id: "es".to_string(),
//!         plan_id: "small".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod aiven;
pub mod config;
pub mod context;
pub mod error;
pub mod ip_filter;
pub mod names;
pub mod provider;
pub mod status;
pub mod types;

// Re-export key types for convenience
pub use aiven::{AivenClient, AivenError, HttpAivenClient, ServiceStatus};
pub use config::{Config, ConfigError, Plan, Service};
pub use context::RequestContext;
pub use error::ProviderError;
pub use ip_filter::{parse_ip_whitelist, EnvIpWhitelist, IpWhitelistSource, StaticIpWhitelist};
pub use names::build_service_name;
pub use provider::AivenProvider;
pub use status::{provider_states_mapping, StatusMapper};
pub use types::*;
