//! Category handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::MSG_CATEGORY_NOT_FOUND;
use crate::dto::CategoryResponse;
use crate::errors::{AppError, AppResult};

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/:category_id", get(get_category))
}

/// List all product categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Categories ordered by name", body = Vec<CategoryResponse>)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryResponse>>> {
    let categories = state.category_service.list_categories().await?;
    Ok(Json(categories))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    tag = "Categories",
    params(("category_id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> AppResult<Json<CategoryResponse>> {
    let category_id = Uuid::parse_str(&category_id)
        .map_err(|_| AppError::NotFound(MSG_CATEGORY_NOT_FOUND.to_string()))?;

    let category = state.category_service.get_category(category_id).await?;
    Ok(Json(category))
}
