//! Recipe request and response shapes, and the checks that guard them.
//!
//! Inbound bodies are validated from raw JSON so the first failing field can be
//! reported with a fixed message, in a fixed order. Model output is checked the
//! same way before it is returned as a [`GeneratedRecipe`].

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Serving count used when the request doesn't specify one.
pub const DEFAULT_SERVES: u64 = 2;

/// A request field that is missing or has the wrong shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Missing or invalid {}", .0.as_str())]
pub struct ValidationError(pub RequestField);

/// Fields of a recipe request, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Ingredients,
    Style,
    MealType,
    Why,
    Serves,
    Preferences,
}

impl RequestField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestField::Ingredients => "ingredients",
            RequestField::Style => "style",
            RequestField::MealType => "mealType",
            RequestField::Why => "why",
            RequestField::Serves => "serves",
            RequestField::Preferences => "preferences",
        }
    }
}

/// A validated recipe request with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::ToSchema),
    schema(rename_all = "camelCase")
)]
pub struct RecipeRequest {
    /// Ingredients to cook with. At least one.
    pub ingredients: Vec<String>,
    pub style: String,
    pub meal_type: String,
    /// Free-text note on why the user wants this recipe.
    pub why: String,
    /// Number of servings. Defaults to 2.
    pub serves: u64,
    /// Dietary preferences or health goals. Defaults to none.
    pub preferences: Vec<String>,
}

impl RecipeRequest {
    /// Validate a raw request body.
    ///
    /// Checks run in field order and stop at the first failure, so the error
    /// always names the earliest bad field.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = body.as_object();
        let get = |name: RequestField| fields.and_then(|f| f.get(name.as_str()));

        let ingredients = get(RequestField::Ingredients)
            .and_then(string_list)
            .filter(|list| !list.is_empty())
            .ok_or(ValidationError(RequestField::Ingredients))?;

        let style = required_string(get(RequestField::Style), RequestField::Style)?;
        let meal_type = required_string(get(RequestField::MealType), RequestField::MealType)?;
        let why = required_string(get(RequestField::Why), RequestField::Why)?;

        let serves = match get(RequestField::Serves) {
            None => DEFAULT_SERVES,
            Some(value) => {
                positive_integer(value).ok_or(ValidationError(RequestField::Serves))?
            }
        };

        let preferences = match get(RequestField::Preferences) {
            None => Vec::new(),
            Some(value) => string_list(value).ok_or(ValidationError(RequestField::Preferences))?,
        };

        Ok(Self {
            ingredients,
            style,
            meal_type,
            why,
            serves,
            preferences,
        })
    }
}

fn required_string(value: Option<&Value>, field: RequestField) -> Result<String, ValidationError> {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ValidationError(field))
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// Accepts `4` and `4.0`, rejects zero, negatives, fractions and anything
/// that isn't a number.
fn positive_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n).filter(|n| *n > 0);
    }
    let f = value.as_f64()?;
    // 2^64 is the first float past u64::MAX
    if f.fract() == 0.0 && f > 0.0 && f < 18_446_744_073_709_551_616.0 {
        Some(f as u64)
    } else {
        None
    }
}

/// A generated recipe, as returned to the caller.
///
/// This is the model's JSON object kept as-is, except that `serves` and
/// `preferences` are replaced with the request's values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GeneratedRecipe(Map<String, Value>);

impl GeneratedRecipe {
    /// Check parsed model output and apply the request's `serves` and
    /// `preferences`.
    ///
    /// `name` and `cookingTime` must be non-empty strings, `ingredients` and
    /// `instructions` must be arrays. On failure the output is handed back
    /// unchanged.
    pub fn from_model_output(output: Value, request: &RecipeRequest) -> Result<Self, Value> {
        let mut fields = match output {
            Value::Object(fields) => fields,
            other => return Err(other),
        };

        let non_empty =
            |name: &str| matches!(fields.get(name), Some(Value::String(s)) if !s.is_empty());
        let array = |name: &str| fields.get(name).is_some_and(Value::is_array);

        if !(non_empty("name")
            && non_empty("cookingTime")
            && array("ingredients")
            && array("instructions"))
        {
            return Err(Value::Object(fields));
        }

        fields.insert("serves".to_string(), Value::from(request.serves));
        fields.insert(
            "preferences".to_string(),
            Value::from(request.preferences.clone()),
        );

        Ok(Self(fields))
    }

    pub fn name(&self) -> &str {
        self.0.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn serves(&self) -> u64 {
        self.0.get("serves").and_then(Value::as_u64).unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Documented shape of a [`GeneratedRecipe`]. Any other fields the model
/// returns are passed through as well.
#[cfg(feature = "openapi")]
#[derive(Debug, Clone, utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    /// Always the requested serving count.
    pub serves: u64,
    /// Always the requested preferences.
    pub preferences: Vec<String>,
    pub cooking_time: String,
    /// Usually strings; any array is accepted.
    pub ingredients: Vec<Value>,
    /// Usually strings; any array is accepted.
    pub instructions: Vec<Value>,
}
