//! AI prompt templates.

pub mod generate_recipe;

pub use generate_recipe::{
    render_generate_recipe_system_prompt, render_generate_recipe_user_prompt,
    GENERATE_RECIPE_PROMPT_NAME,
};
