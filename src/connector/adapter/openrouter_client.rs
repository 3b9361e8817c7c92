use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ChatMessage, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const COMPLETIONS_PATH: &str = "/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// HTTP client for OpenAI-compatible chat-completion APIs (OpenRouter by
/// default).
///
/// Implements [`ChatClient`] so the relay use case stays decoupled from
/// transport and serialization details.
///
/// No sampling parameters are sent, so provider defaults apply. No client
/// timeout is configured and failed calls are not retried.
///
/// ```text
/// OPENROUTER_BASE_URL=https://openrouter.ai/api/v1
/// OPENROUTER_API_KEY=sk-or-...
/// OPENROUTER_MODEL=google/gemini-2.5-flash
/// ```
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenRouterClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable              | Default                        |
    /// |-----------------------|--------------------------------|
    /// | `OPENROUTER_BASE_URL` | `https://openrouter.ai/api/v1` |
    /// | `OPENROUTER_MODEL`    | `google/gemini-2.5-flash`      |
    /// | `OPENROUTER_API_KEY`  | `""` (empty)                   |
    ///
    /// A missing key is not rejected here; the provider refuses the request
    /// and the call fails like any other provider error.
    pub fn from_env() -> Self {
        let base = std::env::var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENROUTER_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let key = std::env::var("OPENROUTER_API_KEY").unwrap_or_default();
        Self::new(key, model, base)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatClient for OpenRouterClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("OpenRouterClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenRouterClient: API returned {status}: {body}");
            return Err(DomainError::provider(format!(
                "OpenRouterClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::provider(format!("OpenRouterClient: failed to parse response: {e}"))
        })?;

        if let Some(error) = api_response.error {
            return Err(DomainError::provider(format!(
                "OpenRouterClient: provider error: {}",
                error.message
            )));
        }

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content);
        debug!(
            "OpenRouterClient: received {} bytes of reply content",
            content.as_deref().map_or(0, str::len)
        );

        Ok(content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
