use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};

use crate::{
    dto::catalog_dto::{CategoryResponse, ErrorResponse},
    error::Result,
    models::quiz::Quiz,
    AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Categories with live quiz counts", body = [CategoryResponse]),
        (status = 500, description = "Unexpected fault", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.query_service.list_categories()?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/quiz/{id}",
    params(
        ("id" = String, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz with its questions", body = Quiz),
        (status = 400, description = "Missing quiz ID", body = ErrorResponse),
        (status = 404, description = "Quiz not found", body = ErrorResponse),
        (status = 500, description = "Unexpected fault", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> Result<Response> {
    let id = id.map(|Path(id)| id).unwrap_or_default();
    let quiz = state.query_service.get_quiz(&id)?;
    Ok(Json(quiz.as_ref()).into_response())
}

#[utoipa::path(
    get,
    path = "/quizzes/{category}",
    params(
        ("category" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Quizzes in the category", body = [Quiz]),
        (status = 400, description = "Missing category parameter", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Unexpected fault", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_quizzes_for_category(
    State(state): State<AppState>,
    category: Option<Path<String>>,
) -> Result<Response> {
    let category = category.map(|Path(category)| category).unwrap_or_default();
    let quizzes = state.query_service.list_quizzes_for_category(&category)?;
    let body: Vec<&Quiz> = quizzes.iter().map(AsRef::as_ref).collect();
    Ok(Json(body).into_response())
}
