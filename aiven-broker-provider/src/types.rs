//! Input and output types for lifecycle operations

use serde::{Deserialize, Serialize};

/// Operation data returned by provision and echoed back on polls
pub const OPERATION_PROVISION: &str = "provision";
/// Operation data returned by update
pub const OPERATION_UPDATE: &str = "update";
/// Operation data returned by deprovision
pub const OPERATION_DEPROVISION: &str = "deprovision";

// ============================================================================
// Provision
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProvisionData {
    /// Marketplace instance id
    pub instance_id: String,
    pub service_id: String,
    pub plan_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProvisionOutput {
    /// Aiven has no per-service dashboard this broker can hand out
    pub dashboard_url: Option<String>,
    pub operation_data: String,
}

// ============================================================================
// Deprovision
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeprovisionData {
    pub instance_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeprovisionOutput {
    pub operation_data: String,
    /// Whether the service was deleted (false if it didn't exist)
    pub deleted: bool,
}

// ============================================================================
// Bind / Unbind
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BindData {
    pub instance_id: String,
    /// Also used as the Aiven username, so must be unique per instance
    pub binding_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnbindData {
    pub instance_id: String,
    pub binding_id: String,
}

// ============================================================================
// Update
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateData {
    pub instance_id: String,
    pub service_id: String,
    pub plan_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateOutput {
    pub operation_data: String,
}

// ============================================================================
// Last Operation
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LastOperationData {
    pub instance_id: String,
    /// Operation data from the call being polled, if the caller kept it
    pub operation_data: Option<String>,
}
