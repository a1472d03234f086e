//! Input and wire types for the Aiven API

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Service Status
// ============================================================================

/// Aiven service state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceStatus {
    Running,
    Rebuilding,
    Rebalancing,
    PowerOff,
    /// Any state this broker does not know about
    Other(String),
}

impl From<String> for ServiceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "RUNNING" => ServiceStatus::Running,
            "REBUILDING" => ServiceStatus::Rebuilding,
            "REBALANCING" => ServiceStatus::Rebalancing,
            "POWEROFF" => ServiceStatus::PowerOff,
            _ => ServiceStatus::Other(value),
        }
    }
}

impl From<ServiceStatus> for String {
    fn from(status: ServiceStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Running => f.write_str("RUNNING"),
            ServiceStatus::Rebuilding => f.write_str("REBUILDING"),
            ServiceStatus::Rebalancing => f.write_str("REBALANCING"),
            ServiceStatus::PowerOff => f.write_str("POWEROFF"),
            ServiceStatus::Other(state) => f.write_str(state),
        }
    }
}

// ============================================================================
// Create / Update Service
// ============================================================================

/// Service-type specific settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elasticsearch_version: Option<String>,
    /// Allowed client addresses; empty means unrestricted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_filter: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateServiceInput {
    pub cloud: String,
    pub plan: String,
    pub service_name: String,
    pub service_type: String,
    pub user_config: UserConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateServiceInput {
    /// Addressed through the URL, not sent in the body
    #[serde(skip)]
    pub service_name: String,
    pub plan: String,
    pub user_config: UserConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteServiceInput {
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetServiceInput {
    pub service_name: String,
}

// ============================================================================
// Service Users
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateServiceUserInput {
    #[serde(skip)]
    pub service_name: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteServiceUserInput {
    pub service_name: String,
    pub username: String,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServiceResponse {
    pub service: ServiceBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServiceBody {
    pub state: ServiceStatus,
    pub update_time: DateTime<Utc>,
    #[serde(default)]
    pub service_uri_params: Option<ServiceUriParamsBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServiceUriParamsBody {
    pub host: String,
    pub port: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreateServiceUserResponse {
    pub user: ServiceUserBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServiceUserBody {
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_status_from_wire() {
        let status: ServiceStatus = serde_json::from_str("\"POWEROFF\"").unwrap();
        assert_eq!(status, ServiceStatus::PowerOff);

        let status: ServiceStatus = serde_json::from_str("\"REBOOTING\"").unwrap();
        assert_eq!(status, ServiceStatus::Other("REBOOTING".to_string()));
        assert_eq!(status.to_string(), "REBOOTING");
    }

    #[test]
    fn test_user_config_omits_empty_fields() {
        let json = serde_json::to_string(&UserConfig::default()).unwrap();
        assert_eq!(json, "{}");

        let config = UserConfig {
            elasticsearch_version: Some("6".to_string()),
            ip_filter: vec!["1.2.3.4".to_string()],
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["elasticsearch_version"], "6");
        assert_eq!(json["ip_filter"][0], "1.2.3.4");
    }

    #[test]
    fn test_update_body_has_no_service_name() {
        let input = UpdateServiceInput {
            service_name: "env-1234".to_string(),
            plan: "startup-4".to_string(),
            user_config: UserConfig::default(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("service_name").is_none());
        assert_eq!(json["plan"], "startup-4");
    }
}
