use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origins allowed to call the API: local frontend development and the
/// deployed frontend.
pub const ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:3000",
    "https://ai-food-creator.netlify.app",
];

/// Configure CORS for the frontend.
///
/// Requests from any other origin get no `Access-Control-Allow-Origin`
/// header, so browsers refuse the response.
pub fn setup_cors() -> CorsLayer {
    let origins = ALLOWED_ORIGINS.map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
