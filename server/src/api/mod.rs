pub mod generate_recipe;
pub mod health;

use crate::AppState;
use axum::routing::{get, post};
use axum::{Json, Router};
use food_creator_core::{Recipe, RecipeRequest};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Routes served by the API
pub fn router() -> Router<AppState> {
    Router::new()
        .route(health::PATH, get(health::health))
        .route(generate_recipe::PATH, post(generate_recipe::generate_recipe))
        .route("/api-docs/openapi.json", get(openapi_json))
}

#[derive(OpenApi)]
#[openapi(
    paths(health::health, generate_recipe::generate_recipe),
    components(schemas(
        ErrorResponse,
        generate_recipe::GenerateErrorResponse,
        RecipeRequest,
        Recipe,
    ))
)]
pub struct ApiDoc;

/// Generate the complete OpenAPI document
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi())
}
