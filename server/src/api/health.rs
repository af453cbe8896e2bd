pub const PATH: &str = "/";

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Server is running", body = String, content_type = "text/plain")
    )
)]
pub async fn health() -> &'static str {
    "AI Food Creator Backend is running."
}
