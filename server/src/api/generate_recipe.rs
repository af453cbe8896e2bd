use crate::api::ErrorResponse;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use food_creator_core::{ai, GenerateError, Recipe, RecipeRequest};
use serde::Serialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

pub const PATH: &str = "/generate-recipe";

/// Error body for failures after the request was accepted.
///
/// `details` and `raw` carry diagnostics; which one is present depends on
/// the kind of failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl From<GenerateError> for GenerateErrorResponse {
    fn from(err: GenerateError) -> Self {
        let error = err.to_string();
        let (details, raw) = match err {
            GenerateError::Provider { details, .. } => (Some(details), None),
            GenerateError::MalformedOutput { raw } => (None, Some(Value::String(raw))),
            GenerateError::IncompleteRecipe { raw } => (None, Some(raw)),
            GenerateError::Unexpected(message) => (Some(json!({ "message": message })), None),
        };
        Self {
            error,
            details,
            raw,
        }
    }
}

fn log_failure(err: &GenerateError) {
    match err {
        GenerateError::Provider { message, details } => {
            tracing::error!(error = %message, details = %details, "Inference provider error")
        }
        GenerateError::MalformedOutput { raw } => {
            tracing::error!(raw = %raw, "Failed to parse recipe from AI response")
        }
        GenerateError::IncompleteRecipe { raw } => {
            tracing::error!(raw = %raw, "Incomplete recipe data from AI")
        }
        GenerateError::Unexpected(message) => {
            tracing::error!(error = %message, "Recipe generation failed")
        }
    }
}

/// Generate a recipe from a list of ingredients
///
/// Makes one call to the inference provider. The returned recipe's `serves`
/// and `preferences` are always the request's values (with defaults applied),
/// whatever the model produced.
#[utoipa::path(
    post,
    path = "/generate-recipe",
    tag = "recipes",
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Generated recipe", body = Recipe),
        (status = 400, description = "Missing or invalid request field", body = ErrorResponse),
        (status = 500, description = "Provider failure or unusable model output", body = GenerateErrorResponse)
    )
)]
pub async fn generate_recipe(
    State(ai_client): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected recipe request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    let request = match RecipeRequest::from_json(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid recipe request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    match ai::generate_recipe(ai_client.as_ref(), &request).await {
        Ok(recipe) => {
            tracing::info!(name = %recipe.name(), serves = recipe.serves(), "Generated recipe");
            (StatusCode::OK, Json(recipe)).into_response()
        }
        Err(e) => {
            log_failure(&e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenerateErrorResponse::from(e)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_body() {
        let body = GenerateErrorResponse::from(GenerateError::Provider {
            message: "Bad credentials".to_string(),
            details: json!({"error": {"message": "Bad credentials"}}),
        });
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "error": "Bad credentials",
                "details": {"error": {"message": "Bad credentials"}}
            })
        );
    }

    #[test]
    fn test_malformed_output_body() {
        let body = GenerateErrorResponse::from(GenerateError::MalformedOutput {
            raw: "not json".to_string(),
        });
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"error": "Failed to parse recipe from AI response.", "raw": "not json"})
        );
    }

    #[test]
    fn test_incomplete_recipe_body() {
        let body = GenerateErrorResponse::from(GenerateError::IncompleteRecipe {
            raw: json!({"name": "Soup"}),
        });
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"error": "Incomplete recipe data from AI.", "raw": {"name": "Soup"}})
        );
    }

    #[test]
    fn test_unexpected_body() {
        let body = GenerateErrorResponse::from(GenerateError::Unexpected("timed out".to_string()));
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "error": "Failed to generate recipe. timed out",
                "details": {"message": "timed out"}
            })
        );
    }
}
