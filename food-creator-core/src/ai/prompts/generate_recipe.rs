//! Recipe generation prompt.

use crate::recipe::RecipeRequest;

/// Prompt name for logging.
pub const GENERATE_RECIPE_PROMPT_NAME: &str = "generate_recipe";

/// Render the system prompt fixing the assistant persona.
pub fn render_generate_recipe_system_prompt() -> String {
    "You are a helpful chef assistant.".to_string()
}

/// Render the user message describing the recipe to generate.
pub fn render_generate_recipe_user_prompt(request: &RecipeRequest) -> String {
    let meal_type = or_placeholder(&request.meal_type, "Any");
    let why = or_placeholder(&request.why, "None");
    let preferences = if request.preferences.is_empty() {
        "None".to_string()
    } else {
        request.preferences.join(", ")
    };

    format!(
        "Generate a detailed cooking recipe for {serves} servings using the following:\n\
         Ingredients: {ingredients}\n\
         Cooking Style: {style}\n\
         Meal Type: {meal_type}\n\
         User Preference: {why}\n\
         Dietary Preferences or Health Goals: {preferences}\n\
         \n\
         In the JSON response, always include a 'serves' field (number), a 'preferences' field \
         (array of strings), and make sure the recipe name or summary clearly states how many \
         servings the recipe makes and reflects the preferences if possible. Respond in JSON with \
         these fields: name (string), serves (number), preferences (array of strings), \
         cookingTime (string), ingredients (array of strings), instructions (array of strings).",
        serves = request.serves,
        ingredients = request.ingredients.join(", "),
        style = request.style,
        meal_type = meal_type,
        why = why,
        preferences = preferences,
    )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RecipeRequest {
        RecipeRequest {
            ingredients: vec!["egg".to_string(), "rice".to_string()],
            style: "stir-fry".to_string(),
            meal_type: "dinner".to_string(),
            why: "quick".to_string(),
            serves: 2,
            preferences: vec![],
        }
    }

    #[test]
    fn test_render_system_prompt() {
        let prompt = render_generate_recipe_system_prompt();
        assert!(prompt.contains("helpful chef assistant"));
    }

    #[test]
    fn test_render_user_prompt() {
        let prompt = render_generate_recipe_user_prompt(&request());
        assert!(prompt.starts_with(
            "Generate a detailed cooking recipe for 2 servings using the following:\n"
        ));
        assert!(prompt.contains("Ingredients: egg, rice\n"));
        assert!(prompt.contains("Cooking Style: stir-fry\n"));
        assert!(prompt.contains("Meal Type: dinner\n"));
        assert!(prompt.contains("User Preference: quick\n"));
        assert!(prompt.contains("Dietary Preferences or Health Goals: None\n\n"));
        assert!(prompt.ends_with(
            "cookingTime (string), ingredients (array of strings), instructions (array of strings)."
        ));
    }

    #[test]
    fn test_render_user_prompt_placeholders() {
        let request = RecipeRequest {
            meal_type: String::new(),
            why: String::new(),
            ..request()
        };
        let prompt = render_generate_recipe_user_prompt(&request);
        assert!(prompt.contains("Meal Type: Any\n"));
        assert!(prompt.contains("User Preference: None\n"));
    }

    #[test]
    fn test_render_user_prompt_preferences() {
        let request = RecipeRequest {
            serves: 4,
            preferences: vec!["vegan".to_string(), "low sodium".to_string()],
            ..request()
        };
        let prompt = render_generate_recipe_user_prompt(&request);
        assert!(prompt.contains("recipe for 4 servings"));
        assert!(prompt.contains("Dietary Preferences or Health Goals: vegan, low sodium\n"));
    }

    #[test]
    fn test_render_user_prompt_lists_response_fields() {
        let prompt = render_generate_recipe_user_prompt(&request());
        for field in [
            "name (string)",
            "serves (number)",
            "preferences (array of strings)",
            "cookingTime (string)",
            "ingredients (array of strings)",
            "instructions (array of strings)",
        ] {
            assert!(prompt.contains(field), "missing {}", field);
        }
    }
}
