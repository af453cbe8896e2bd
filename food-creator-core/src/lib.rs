pub mod ai;
pub mod recipe;

pub use ai::{generate_recipe, AiClient, AiError, GenerateError, InferenceClient};
pub use recipe::{GeneratedRecipe, RecipeRequest, RequestField, ValidationError, DEFAULT_SERVES};

#[cfg(feature = "openapi")]
pub use recipe::Recipe;
