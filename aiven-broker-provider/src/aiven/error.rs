use thiserror::Error;

#[derive(Debug, Error)]
pub enum AivenError {
    #[error("service does not exist")]
    ServiceNotFound,

    #[error("invalid service update")]
    InvalidUpdate,

    #[error("service {0} has no connection parameters yet")]
    ConnectionDetailsUnavailable(String),

    #[error("aiven api returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid aiven api url: {0}")]
    InvalidBaseUrl(String),

    #[error("aiven request failed: {0}")]
    Http(#[from] reqwest::Error),
}
