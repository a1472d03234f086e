//! Aiven API client interface

mod error;
mod http_client;
mod types;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use error::AivenError;
pub use http_client::{HttpAivenClient, AIVEN_BASE_URL};
pub use types::*;

/// Operations the broker needs from the Aiven API
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait AivenClient: Send + Sync {
    async fn create_service(&self, input: &CreateServiceInput) -> Result<(), AivenError>;

    /// Fails with [`AivenError::ServiceNotFound`] when the service does not exist
    async fn delete_service(&self, input: &DeleteServiceInput) -> Result<(), AivenError>;

    /// Fails with [`AivenError::InvalidUpdate`] when Aiven refuses the plan change
    async fn update_service(&self, input: &UpdateServiceInput) -> Result<(), AivenError>;

    /// Returns the password Aiven generated for the new user
    async fn create_service_user(&self, input: &CreateServiceUserInput) -> Result<String, AivenError>;

    async fn delete_service_user(&self, input: &DeleteServiceUserInput) -> Result<(), AivenError>;

    /// Returns (host, port)
    async fn get_service_connection_details(
        &self,
        input: &GetServiceInput,
    ) -> Result<(String, String), AivenError>;

    /// Returns the service state and the time of its last update
    async fn get_service_status(
        &self,
        input: &GetServiceInput,
    ) -> Result<(ServiceStatus, DateTime<Utc>), AivenError>;
}
