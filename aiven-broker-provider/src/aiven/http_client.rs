//! reqwest-based Aiven API client

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, StatusCode};
use url::Url;

use super::error::AivenError;
use super::types::*;
use super::AivenClient;

pub const AIVEN_BASE_URL: &str = "https://api.aiven.io";

/// Aiven API client scoped to one project
#[derive(Clone)]
pub struct HttpAivenClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
    project: String,
}

impl std::fmt::Debug for HttpAivenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAivenClient")
            .field("base_url", &self.base_url)
            .field("project", &self.project)
            .finish_non_exhaustive()
    }
}

impl HttpAivenClient {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        project: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AivenError> {
        let base_url = base_url.into();
        let base_url = Url::parse(&base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or(AivenError::InvalidBaseUrl(base_url))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            token: token.into(),
            project: project.into(),
        })
    }

    /// `{base}/v1/project/{project}/service/{segments...}`, each segment percent-encoded
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["v1", "project", self.project.as_str(), "service"])
                .extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AivenError> {
        let response = request
            .header(AUTHORIZATION, format!("aivenv1 {}", self.token))
            .send()
            .await?;
        Ok(response)
    }

    async fn get_service(&self, input: &GetServiceInput) -> Result<ServiceBody, AivenError> {
        let response = self
            .send(self.http.get(self.url(&[input.service_name.as_str()])))
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body: ServiceResponse = response.json().await?;
                Ok(body.service)
            }
            StatusCode::NOT_FOUND => Err(AivenError::ServiceNotFound),
            _ => Err(api_error(response).await),
        }
    }
}

/// Turn a non-success response into an [`AivenError::Api`]
async fn api_error(response: Response) -> AivenError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or(text);
    AivenError::Api { status, message }
}

#[async_trait]
impl AivenClient for HttpAivenClient {
    async fn create_service(&self, input: &CreateServiceInput) -> Result<(), AivenError> {
        let response = self
            .send(self.http.post(self.url(&[])).json(input))
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }

    async fn delete_service(&self, input: &DeleteServiceInput) -> Result<(), AivenError> {
        let response = self
            .send(self.http.delete(self.url(&[input.service_name.as_str()])))
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(AivenError::ServiceNotFound),
            _ => Err(api_error(response).await),
        }
    }

    async fn update_service(&self, input: &UpdateServiceInput) -> Result<(), AivenError> {
        let response = self
            .send(self.http.put(self.url(&[input.service_name.as_str()])).json(input))
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::FORBIDDEN => Err(AivenError::InvalidUpdate),
            _ => Err(api_error(response).await),
        }
    }

    async fn create_service_user(&self, input: &CreateServiceUserInput) -> Result<String, AivenError> {
        let url = self.url(&[input.service_name.as_str(), "user"]);
        let response = self.send(self.http.post(url).json(input)).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        let body: CreateServiceUserResponse = response.json().await?;
        Ok(body.user.password)
    }

    async fn delete_service_user(&self, input: &DeleteServiceUserInput) -> Result<(), AivenError> {
        let url = self.url(&[input.service_name.as_str(), "user", input.username.as_str()]);
        let response = self.send(self.http.delete(url)).await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }

    async fn get_service_connection_details(
        &self,
        input: &GetServiceInput,
    ) -> Result<(String, String), AivenError> {
        let service = self.get_service(input).await?;
        let params = service
            .service_uri_params
            .ok_or_else(|| AivenError::ConnectionDetailsUnavailable(input.service_name.clone()))?;
        Ok((params.host, params.port))
    }

    async fn get_service_status(
        &self,
        input: &GetServiceInput,
    ) -> Result<(ServiceStatus, DateTime<Utc>), AivenError> {
        let service = self.get_service(input).await?;
        Ok((service.state, service.update_time))
    }
}
