use async_trait::async_trait;
use tracing::debug;

use crate::application::AssistantBackend;
use crate::domain::{DomainError, Profile, Turn};

use super::dto::{ChatRequest, ChatResponse, ErrorResponse, ProfileResponse};

/// [`AssistantBackend`] talking to a running `giftchat serve` over HTTP.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn error_from(response: reqwest::Response) -> DomainError {
        let status = response.status();
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_default();
        DomainError::provider(format!("server returned {status}: {message}"))
    }
}

#[async_trait]
impl AssistantBackend for HttpBackend {
    async fn fetch_profile(&self) -> Result<Profile, DomainError> {
        let url = format!("{}/user-profile", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("HttpBackend: request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: ProfileResponse = response.json().await.map_err(|e| {
            DomainError::provider(format!("HttpBackend: failed to parse response: {e}"))
        })?;
        Ok(Profile::new(body.profile))
    }

    async fn reply(&self, history: &[Turn]) -> Result<String, DomainError> {
        let url = format!("{}/chat", self.base_url);
        debug!("HttpBackend: posting {} turns to {}", history.len(), url);

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest {
                messages: history.to_vec(),
            })
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("HttpBackend: request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            DomainError::provider(format!("HttpBackend: failed to parse response: {e}"))
        })?;
        Ok(body.message)
    }
}
