//! Artisan product handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::MSG_ARTISAN_NOT_FOUND;
use crate::dto::{ProductResponse, RegisterProductRequest};
use crate::errors::{AppError, AppResult};

/// Create artisan product routes
pub fn artisan_routes() -> Router<AppState> {
    Router::new().route(
        "/:artisan_id/products",
        get(list_artisan_products).post(create_artisan_product),
    )
}

// A malformed id cannot name an existing artisan.
fn parse_artisan_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::unknown_reference(MSG_ARTISAN_NOT_FOUND))
}

/// Add a product to an artisan's catalog
#[utoipa::path(
    post,
    path = "/api/artisan/{artisan_id}/products",
    tag = "Products",
    params(("artisan_id" = Uuid, Path, description = "Artisan (user) ID")),
    request_body = RegisterProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid data, unknown artisan or category, or duplicate name")
    )
)]
pub async fn create_artisan_product(
    State(state): State<AppState>,
    Path(artisan_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<RegisterProductRequest>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let artisan_id = parse_artisan_id(&artisan_id)?;
    let product = state
        .product_service
        .create_artisan_product(artisan_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// List every product of an artisan
#[utoipa::path(
    get,
    path = "/api/artisan/{artisan_id}/products",
    tag = "Products",
    params(("artisan_id" = Uuid, Path, description = "Artisan (user) ID")),
    responses(
        (status = 200, description = "Products of the artisan", body = Vec<ProductResponse>),
        (status = 400, description = "Artisan not found")
    )
)]
pub async fn list_artisan_products(
    State(state): State<AppState>,
    Path(artisan_id): Path<String>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let artisan_id = parse_artisan_id(&artisan_id)?;
    let products = state
        .product_service
        .get_all_products_by_artisan(artisan_id)
        .await?;

    Ok(Json(products))
}
