use axum::http::{HeaderName, header};
use tower_http::cors::{Any, CorsLayer};

/// Any origin, with the headers browser clients send alongside their
/// bearer token.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_headers([
        header::AUTHORIZATION,
        HeaderName::from_static("x-client-info"),
        HeaderName::from_static("apikey"),
        header::CONTENT_TYPE,
    ])
}
