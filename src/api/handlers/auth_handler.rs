//! Registration handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::dto::{
    ArtisanRegistrationResponse, BuyerRegistrationResponse, RegisterArtisanRequest,
    RegisterBuyerRequest,
};
use crate::errors::AppResult;

/// Create registration routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register/artisan", post(register_artisan))
        .route("/register/buyer", post(register_buyer))
}

/// Register a new artisan
#[utoipa::path(
    post,
    path = "/api/auth/register/artisan",
    tag = "Authentication",
    request_body = RegisterArtisanRequest,
    responses(
        (status = 201, description = "Artisan registered successfully", body = ArtisanRegistrationResponse),
        (status = 400, description = "Validation error, weak password or email already registered")
    )
)]
pub async fn register_artisan(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterArtisanRequest>,
) -> AppResult<(StatusCode, Json<ArtisanRegistrationResponse>)> {
    let artisan = state.registration_service.register_artisan(payload).await?;

    Ok((StatusCode::CREATED, Json(artisan)))
}

/// Register a new buyer
#[utoipa::path(
    post,
    path = "/api/auth/register/buyer",
    tag = "Authentication",
    request_body = RegisterBuyerRequest,
    responses(
        (status = 201, description = "Buyer registered successfully", body = BuyerRegistrationResponse),
        (status = 400, description = "Validation error, weak password or email already registered")
    )
)]
pub async fn register_buyer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterBuyerRequest>,
) -> AppResult<(StatusCode, Json<BuyerRegistrationResponse>)> {
    let buyer = state.registration_service.register_buyer(payload).await?;

    Ok((StatusCode::CREATED, Json(buyer)))
}
