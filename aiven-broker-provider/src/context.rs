//! Per-request deadline propagation

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::ProviderError;

/// Deadline for one lifecycle operation
///
/// Every Aiven call made on behalf of the operation runs under this deadline.
/// When it passes the in-flight call is dropped, which aborts the HTTP request.
/// Dropping the operation future itself cancels it the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// No deadline; the HTTP client timeout still applies
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Run a vendor call under this context's deadline
    pub async fn run<T, E, F>(&self, call: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<ProviderError>,
    {
        let result = match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, call)
                .await
                .map_err(|_| ProviderError::DeadlineExceeded)?,
            None => call.await,
        };
        result.map_err(Into::into)
    }
}
