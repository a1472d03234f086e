//! Broker configuration and plan catalog

use std::collections::HashSet;
use std::path::Path;

use aiven_broker_models::{Catalog, ServiceOffering, ServicePlan};
use serde::Deserialize;
use thiserror::Error;

use crate::error::ProviderError;
use crate::status::{DEFAULT_UPDATE_DEBOUNCE_SECONDS, MAX_UPDATE_DEBOUNCE_SECONDS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Broker configuration, loaded once at startup and read-only afterwards
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Aiven cloud region every service is created in (e.g. "aws-eu-west-1")
    pub cloud: String,
    /// Prepended to every derived service name
    #[serde(default)]
    pub service_name_prefix: String,
    /// Aiven project owning the services
    pub project: String,
    /// Aiven API token; usually supplied through the environment instead
    #[serde(default)]
    pub api_token: Option<String>,
    /// Seconds after an update during which polls report "in progress"
    #[serde(default = "default_update_debounce_seconds")]
    pub update_debounce_seconds: u64,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub bindable: bool,
    #[serde(default = "default_true")]
    pub plan_updateable: bool,
    pub plans: Vec<Plan>,
}

/// Catalog plan with the Aiven parameters it maps to
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Aiven plan code (e.g. "startup-4")
    pub aiven_plan: String,
    /// Elasticsearch major version (e.g. "6")
    #[serde(default)]
    pub elasticsearch_version: Option<String>,
}

fn default_update_debounce_seconds() -> u64 {
    DEFAULT_UPDATE_DEBOUNCE_SECONDS
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path)?;
        Self::from_json(&bytes)
    }

    /// Decode and validate a JSON config document
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cloud.is_empty() {
            return Err(ConfigError::Invalid("cloud must be set".to_string()));
        }
        if self.project.is_empty() {
            return Err(ConfigError::Invalid("project must be set".to_string()));
        }
        if !is_valid_prefix(&self.service_name_prefix) {
            return Err(ConfigError::Invalid(format!(
                "service_name_prefix '{}' must start with a lowercase letter and contain only lowercase letters, digits and '-'",
                self.service_name_prefix
            )));
        }

        if self.update_debounce_seconds > MAX_UPDATE_DEBOUNCE_SECONDS {
            return Err(ConfigError::Invalid(format!(
                "update_debounce_seconds must be at most {}",
                MAX_UPDATE_DEBOUNCE_SECONDS
            )));
        }

        let mut service_ids = HashSet::new();
        for service in &self.catalog.services {
            if !service_ids.insert(service.id.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate service id '{}'", service.id)));
            }

            let mut plan_ids = HashSet::new();
            for plan in &service.plans {
                if !plan_ids.insert(plan.id.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "duplicate plan id '{}' in service '{}'",
                        plan.id, service.id
                    )));
                }
                if plan.aiven_plan.is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "plan '{}' in service '{}' has no aiven_plan",
                        plan.id, service.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Find the plan for an exact (service id, plan id) pair
    pub fn find_plan(&self, service_id: &str, plan_id: &str) -> Result<&Plan, ProviderError> {
        self.catalog
            .services
            .iter()
            .filter(|service| service.id == service_id)
            .flat_map(|service| service.plans.iter())
            .find(|plan| plan.id == plan_id)
            .ok_or_else(|| ProviderError::PlanNotFound {
                service_id: service_id.to_string(),
                plan_id: plan_id.to_string(),
            })
    }

    /// Marketplace view of the catalog, without Aiven plan details
    pub fn catalog(&self) -> Catalog {
        Catalog {
            services: self
                .catalog
                .services
                .iter()
                .map(|service| ServiceOffering {
                    id: service.id.clone(),
                    name: service.name.clone(),
                    description: service.description.clone(),
                    bindable: service.bindable,
                    plan_updateable: service.plan_updateable,
                    plans: service
                        .plans
                        .iter()
                        .map(|plan| ServicePlan {
                            id: plan.id.clone(),
                            name: plan.name.clone(),
                            description: plan.description.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    match prefix.chars().next() {
        None => true,
        Some(first) => {
            first.is_ascii_lowercase()
                && prefix
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        }
    }
}
