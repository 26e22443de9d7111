pub mod catalog;
pub mod health;

use std::any::Any;

use axum::{
    middleware::from_fn_with_state,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::dto::catalog_dto::{CategoryResponse, ErrorResponse};
use crate::error::Error;
use crate::middleware::{
    cors::permissive_cors,
    rate_limit::{new_rps_state, rps_middleware},
};
use crate::models::{
    question::Question,
    quiz::{Difficulty, Quiz},
};
use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        catalog::list_categories,
        catalog::get_quiz,
        catalog::list_quizzes_for_category,
    ),
    components(schemas(CategoryResponse, ErrorResponse, Quiz, Question, Difficulty))
)]
pub struct ApiDoc;

pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

pub fn build_router(state: AppState, public_rps: u32) -> Router {
    let catalog_api = Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/quiz", get(catalog::get_quiz))
        .route("/quiz/", get(catalog::get_quiz))
        .route("/quiz/:id", get(catalog::get_quiz))
        .route("/quizzes", get(catalog::list_quizzes_for_category))
        .route("/quizzes/", get(catalog::list_quizzes_for_category))
        .route("/quizzes/:category", get(catalog::list_quizzes_for_category))
        .layer(from_fn_with_state(new_rps_state(public_rps), rps_middleware));

    Router::new()
        .route("/health", get(health::health))
        .route("/openapi.json", get(openapi))
        .merge(catalog_api)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "Request handler panicked");
    Error::Internal("Internal Server Error".to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn panics_become_json_500s() {
        let resp = handle_panic(Box::new("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(resp.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal Server Error");
    }

    #[test]
    fn openapi_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/categories", "/quiz/{id}", "/quizzes/{category}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
