//! Recipe generation: prompt the model and turn its reply into a [`GeneratedRecipe`].

use serde_json::Value;
use thiserror::Error;

use crate::ai::prompts::generate_recipe::{
    render_generate_recipe_system_prompt, render_generate_recipe_user_prompt,
    GENERATE_RECIPE_PROMPT_NAME,
};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest};
use crate::recipe::{GeneratedRecipe, RecipeRequest};

/// Sampling temperature for recipe generation.
pub const GENERATE_RECIPE_TEMPERATURE: f32 = 0.7;

/// Output token cap for recipe generation.
pub const GENERATE_RECIPE_MAX_TOKENS: u32 = 700;

/// Ways recipe generation can fail after the request was accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The provider reported a failure. `details` is its response body.
    #[error("{message}")]
    Provider { message: String, details: Value },

    /// The model replied with something that isn't JSON.
    #[error("Failed to parse recipe from AI response.")]
    MalformedOutput { raw: String },

    /// The model replied with JSON that lacks required recipe fields.
    #[error("Incomplete recipe data from AI.")]
    IncompleteRecipe { raw: Value },

    /// The call failed before the provider could answer.
    #[error("Failed to generate recipe. {0}")]
    Unexpected(String),
}

impl From<AiError> for GenerateError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::Provider { message, details } => GenerateError::Provider { message, details },
            AiError::Transport(message) => GenerateError::Unexpected(message),
        }
    }
}

/// Build the chat request sent to the provider for `request`.
pub fn build_generate_recipe_request(request: &RecipeRequest) -> ChatRequest {
    ChatRequest {
        messages: vec![
            ChatMessage::system(render_generate_recipe_system_prompt()),
            ChatMessage::user(render_generate_recipe_user_prompt(request)),
        ],
        max_tokens: Some(GENERATE_RECIPE_MAX_TOKENS),
        temperature: Some(GENERATE_RECIPE_TEMPERATURE),
    }
}

/// Generate a recipe for a validated request.
///
/// Makes exactly one call to `ai_client`. The returned recipe always carries
/// the request's `serves` and `preferences`.
pub async fn generate_recipe(
    ai_client: &dyn AiClient,
    request: &RecipeRequest,
) -> Result<GeneratedRecipe, GenerateError> {
    let chat_request = build_generate_recipe_request(request);

    let response = ai_client
        .complete(GENERATE_RECIPE_PROMPT_NAME, chat_request)
        .await?;

    let output: Value = serde_json::from_str(&response.content).map_err(|e| {
        tracing::debug!(error = %e, "AI response is not JSON");
        GenerateError::MalformedOutput {
            raw: response.content.clone(),
        }
    })?;

    GeneratedRecipe::from_model_output(output, request)
        .map_err(|raw| GenerateError::IncompleteRecipe { raw })
}
