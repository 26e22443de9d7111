use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Any origin may read; the surface has no write methods to expose.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any)
}
