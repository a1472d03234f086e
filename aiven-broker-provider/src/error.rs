//! Error types for the lifecycle adapter

use thiserror::Error;

use crate::aiven::AivenError;

/// Errors returned by [`crate::AivenProvider`] operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An IP whitelist segment is not a dotted quad.
    #[error("malformed ip address: {0}")]
    MalformedIpAddress(String),

    /// No catalog entry matches the service and plan pair.
    #[error("plan not found for service {service_id} and plan {plan_id}")]
    PlanNotFound { service_id: String, plan_id: String },

    /// Aiven rejected the requested plan transition.
    #[error("plan change not supported")]
    PlanChangeNotSupported,

    /// The service no longer exists at Aiven.
    #[error("instance does not exist")]
    InstanceGone,

    /// Aiven returned a host and port that do not form a valid URI.
    #[error("invalid connection details: {0}")]
    InvalidConnectionDetails(String),

    /// The request deadline passed before Aiven answered.
    #[error("deadline exceeded waiting for Aiven")]
    DeadlineExceeded,

    /// Any other Aiven failure, passed through unchanged.
    #[error(transparent)]
    Vendor(#[from] AivenError),
}

impl ProviderError {
    /// Whether the request was rejected before reaching Aiven
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProviderError::MalformedIpAddress(_) | ProviderError::PlanNotFound { .. }
        )
    }
}
