//! Server configuration from environment variables.

use food_creator_core::ai::{AiConfig, ConfigError};
use std::env;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Everything the server reads from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub ai: AiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `PORT` (optional): listen port, default 5000
    /// - plus everything [`AiConfig::from_env`] reads
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
        };

        let ai = AiConfig::from_lookup(&lookup)?;

        Ok(Self { port, ai })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(name: &str) -> Option<String> {
        match name {
            "AZURE_OPENAI_ENDPOINT" => Some("https://models.example.com/inference".to_string()),
            "AZURE_OPENAI_KEY" => Some("secret".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_default_port() {
        let config = ServerConfig::from_lookup(base).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.ai.model, "openai/gpt-4.1");
    }

    #[test]
    fn test_port_override() {
        let config = ServerConfig::from_lookup(|name| match name {
            "PORT" => Some("8080".to_string()),
            other => base(other),
        })
        .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(|name| match name {
            "PORT" => Some("eighty".to_string()),
            other => base(other),
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: "eighty".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_key() {
        let err = ServerConfig::from_lookup(|name| match name {
            "AZURE_OPENAI_KEY" => None,
            other => base(other),
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingEnvVar("AZURE_OPENAI_KEY".to_string()));
    }
}
