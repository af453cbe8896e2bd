//! Chat-completion client for the inference provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::config::AiConfig;
use super::types::{ChatMessage, ChatRequest, ChatResponse, Usage};

/// Message used when the provider fails without saying why.
pub const PROVIDER_ERROR_FALLBACK: &str = "Inference provider error.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AiError {
    /// The provider answered, but with an error or a body we can't use.
    /// `details` is the provider's response body.
    #[error("{message}")]
    Provider { message: String, details: Value },

    /// The request never produced a usable HTTP response.
    #[error("{0}")]
    Transport(String),
}

/// Trait for AI clients.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Complete a chat request.
    ///
    /// The `prompt_name` identifies the caller in logs.
    async fn complete(&self, prompt_name: &str, request: ChatRequest)
        -> Result<ChatResponse, AiError>;

    /// Get the model name (e.g., "openai/gpt-4.1").
    fn model_name(&self) -> &str;
}

/// AI client talking to an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug)]
pub struct InferenceClient {
    client: reqwest::Client,
    config: AiConfig,
}

impl InferenceClient {
    /// Create a new client from environment configuration.
    pub fn from_env() -> Result<Self, super::config::ConfigError> {
        Ok(Self::new(AiConfig::from_env()?))
    }

    /// Create a new client with the given configuration.
    pub fn new(config: AiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

/// Provider request format.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    model: &'a str,
}

/// Provider response format.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderApiError {
    message: String,
}

/// Error response from the provider.
#[derive(Debug, Deserialize)]
struct ProviderErrorResponse {
    error: ProviderApiError,
}

fn provider_error(body: &str) -> AiError {
    let details =
        serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::String(body.to_string()));
    let message = serde_json::from_str::<ProviderErrorResponse>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| PROVIDER_ERROR_FALLBACK.to_string());
    AiError::Provider { message, details }
}

#[async_trait]
impl AiClient for InferenceClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let body = CompletionRequest {
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            model: &self.config.model,
        };

        tracing::debug!(
            prompt_name = prompt_name,
            model = &self.config.model,
            "Calling AI API"
        );

        let response = self
            .client
            .post(self.config.chat_completions_url())
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Transport(e.to_string()))?;

        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|e| AiError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "AI API returned error status");
            return Err(provider_error(&body));
        }

        let response: CompletionResponse =
            serde_json::from_str(&body).map_err(|_| provider_error(&body))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| provider_error(&body))?;

        let usage = response.usage.unwrap_or_default();
        tracing::debug!(
            prompt_name = prompt_name,
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "AI API call completed"
        );

        Ok(ChatResponse { content, usage })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_provider_error_uses_message() {
        let err = provider_error(r#"{"error": {"code": "unauthorized", "message": "Bad key"}}"#);
        assert_eq!(
            err,
            AiError::Provider {
                message: "Bad key".to_string(),
                details: json!({"error": {"code": "unauthorized", "message": "Bad key"}}),
            }
        );
    }

    #[test]
    fn test_provider_error_fallback_for_plain_text() {
        let err = provider_error("upstream unavailable");
        assert_eq!(
            err,
            AiError::Provider {
                message: PROVIDER_ERROR_FALLBACK.to_string(),
                details: json!("upstream unavailable"),
            }
        );
    }

    #[test]
    fn test_provider_error_fallback_for_empty_message() {
        let err = provider_error(r#"{"error": {"message": ""}}"#);
        assert_eq!(
            err,
            AiError::Provider {
                message: PROVIDER_ERROR_FALLBACK.to_string(),
                details: json!({"error": {"message": ""}}),
            }
        );
    }

    #[test]
    fn test_request_serialization() {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("hi")];
        let body = CompletionRequest {
            messages: &messages,
            temperature: Some(0.7),
            max_tokens: Some(700),
            model: "openai/gpt-4.1",
        };

        let value: Value = serde_json::from_str(&serde_json::to_string(&body).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ],
                "temperature": 0.7,
                "max_tokens": 700,
                "model": "openai/gpt-4.1"
            })
        );
    }
}
