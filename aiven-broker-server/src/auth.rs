use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::api::AppState;

/// Credentials the marketplace must present on every broker call
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check an `Authorization: Basic ...` header against the configured credentials
    pub fn verify(&self, value: Option<&HeaderValue>) -> bool {
        let Some(encoded) = value
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Basic "))
        else {
            return false;
        };

        let Some(decoded) = STANDARD
            .decode(encoded.trim())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
        else {
            return false;
        };

        match decoded.split_once(':') {
            Some((username, password)) => username == self.username && password == self.password,
            None => false,
        }
    }
}

/// Middleware rejecting requests without valid basic auth credentials
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.auth.verify(request.headers().get(header::AUTHORIZATION)) {
        return next.run(request).await;
    }

    tracing::debug!("Rejected unauthenticated request to {}", request.uri().path());
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"aiven-broker\"")],
    )
        .into_response()
}
