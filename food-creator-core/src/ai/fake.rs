//! Fake AI client for testing.
//!
//! This client returns canned responses based on prompt matching,
//! allowing tests to run without network access or API costs.

use async_trait::async_trait;
use std::sync::{Mutex, RwLock};

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Usage};

/// A fake AI client for testing.
///
/// Responses are matched by checking if the user message contains a registered
/// substring. If no match is found, returns the default outcome or an error.
/// Every request is recorded so tests can check whether the provider was called.
#[derive(Debug, Default)]
pub struct FakeAiClient {
    /// Prompt substring -> response content, checked in insertion order
    responses: RwLock<Vec<(String, String)>>,
    /// Outcome if no pattern matches
    default_outcome: Option<Result<String, AiError>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl FakeAiClient {
    /// Create a new FakeAiClient with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeAiClient that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    /// Create a FakeAiClient that answers every prompt with `response`.
    pub fn answering(response: &str) -> Self {
        Self::new().with_default_response(response)
    }

    /// Create a FakeAiClient that fails every prompt with `error`.
    pub fn failing(error: AiError) -> Self {
        Self {
            default_outcome: Some(Err(error)),
            ..Self::default()
        }
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .push((prompt_contains.to_string(), response.to_string()));
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_outcome = Some(Ok(response.to_string()));
        self
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        _prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let prompt = request.user_content().unwrap_or_default().to_lowercase();
        self.requests.lock().unwrap().push(request.clone());

        let matched = self
            .responses
            .read()
            .unwrap()
            .iter()
            .find(|(pattern, _)| prompt.contains(&pattern.to_lowercase()))
            .map(|(_, response)| response.clone());

        let content = match (matched, &self.default_outcome) {
            (Some(response), _) => response,
            (None, Some(outcome)) => outcome.clone()?,
            (None, None) => {
                return Err(AiError::Transport(format!(
                    "FakeAiClient: No response configured for prompt (first 100 chars): {}",
                    prompt.chars().take(100).collect::<String>()
                )))
            }
        };

        Ok(ChatResponse {
            content,
            usage: Usage::default(),
        })
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
