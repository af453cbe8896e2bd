//! AI client module for recipe generation via a chat-completion provider.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `InferenceClient`, the HTTP implementation
//! - `FakeAiClient` for tests
//! - Configuration via environment variables
//! - The recipe generation prompt and the flow around it
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `AZURE_OPENAI_ENDPOINT` (required): Provider base URL
//! - `AZURE_OPENAI_KEY` (required): Provider API key
//! - `AZURE_OPENAI_MODEL` (optional): Model name, e.g., "openai/gpt-4.1"
//! - `AZURE_OPENAI_API_VERSION` (optional): `api-version` query parameter
//!
//! # Example
//!
//! ```ignore
//! use food_creator_core::ai::{generate_recipe, InferenceClient};
//! use food_creator_core::RecipeRequest;
//!
//! let client = InferenceClient::from_env()?;
//! let request = RecipeRequest::from_json(&body)?;
//!
//! let recipe = generate_recipe(&client, &request).await?;
//! println!("Recipe: {}", recipe.name());
//! ```

mod client;
mod config;
mod fake;
mod generate_recipe;
pub mod prompts;
mod types;

pub use client::{AiClient, AiError, InferenceClient, PROVIDER_ERROR_FALLBACK};
pub use config::{AiConfig, ConfigError, DEFAULT_API_VERSION, DEFAULT_MODEL};
pub use fake::FakeAiClient;
pub use generate_recipe::{
    build_generate_recipe_request, generate_recipe, GenerateError, GENERATE_RECIPE_MAX_TOKENS,
    GENERATE_RECIPE_TEMPERATURE,
};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};
