//! Inference provider configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default model to use.
pub const DEFAULT_MODEL: &str = "openai/gpt-4.1";

/// Default `api-version` query parameter sent to the provider.
pub const DEFAULT_API_VERSION: &str = "2024-05-01-preview";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnvVar { name: String, value: String },
}

/// Inference provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    /// Base URL of the chat-completion API (without `/chat/completions`).
    pub endpoint: String,
    /// API key for the provider.
    pub api_key: String,
    /// Model identifier (e.g., "openai/gpt-4.1").
    pub model: String,
    /// Value of the `api-version` query parameter.
    pub api_version: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `AZURE_OPENAI_ENDPOINT`: provider base URL
    /// - `AZURE_OPENAI_KEY`: provider API key
    ///
    /// Optional:
    /// - `AZURE_OPENAI_MODEL`: Model name (default: "openai/gpt-4.1")
    /// - `AZURE_OPENAI_API_VERSION`: API version (default: "2024-05-01-preview")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let endpoint = required("AZURE_OPENAI_ENDPOINT")?;
        let api_key = required("AZURE_OPENAI_KEY")?;

        let model = lookup("AZURE_OPENAI_MODEL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_version = lookup("AZURE_OPENAI_API_VERSION")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            endpoint,
            api_key,
            model,
            api_version,
        })
    }

    /// Full URL of the chat completions route.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}
