use serde::{Deserialize, Serialize};

/// Externally visible outcome of an in-flight operation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LastOperationState {
    #[serde(rename = "succeeded")]
    Succeeded,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "failed")]
    Failed,
}

/// Connection parameters handed out with every binding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceUriParams {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
}

/// Credentials for one binding (never stored by the broker)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(rename = "service_uri")]
    pub uri: String,
    #[serde(rename = "service_uri_params")]
    pub uri_params: ServiceUriParams,
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub services: Vec<ServiceOffering>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub description: String,
    pub bindable: bool,
    pub plan_updateable: bool,
    pub plans: Vec<ServicePlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServicePlan {
    pub id: String,
    pub name: String,
    pub description: String,
}

// ============================================================================
// Requests
// ============================================================================

/// Body of a provision request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionRequest {
    pub service_id: String,
    pub plan_id: String,
    #[serde(default)]
    pub organization_guid: Option<String>,
    #[serde(default)]
    pub space_guid: Option<String>,
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,
}

/// Body of an update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub service_id: String,
    pub plan_id: String,
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,
}

/// Body of a bind request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindRequest {
    pub service_id: String,
    pub plan_id: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Response from an operation that completes asynchronously
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsyncOperationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

/// Response for a last-operation poll
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastOperationResponse {
    pub state: LastOperationState,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BindingResponse {
    pub credentials: Credentials,
}

/// Error body; `error` carries a machine-readable code when one applies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub description: String,
}
