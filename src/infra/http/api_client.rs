use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::domain::services::session::SessionStore;
use crate::error::{extract_message, ApiError};

/// Shared HTTP plumbing for every gateway: one `reqwest::Client`, the API
/// base URL, bearer-token injection from the session, and uniform failure
/// mapping. A 401 from any endpoint invalidates the whole session.
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: &Config, session: Arc<SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_url.clone(),
            session,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn check_status(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // An expired or revoked token invalidates the whole session; a
        // rejected sign-in lands here too, where the session is empty anyway.
        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
        }

        let body = response.text().await.unwrap_or_default();
        warn!("API call failed. Status: {}, Body: {}", status, body);
        let message = extract_message(&body);
        Err(ApiError::from_status(status, message))
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let response = self.check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        self.check_status(response).await?;
        Ok(())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    /// POST with no payload and no interesting response body.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::POST, path)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, path)).await
    }
}
