//! Handlers for ad endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::ad::{AdResponse, AdsQuery, CreateAdRequest, UpdateAdRequest};
use crate::application::use_cases::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a draft ad owned by the caller.
///
/// # Endpoint
///
/// `POST /api/v1/ads`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Gaming Laptop",
///   "description": "High performance gaming laptop with RTX 4080 graphics card",
///   "price": 1500,
///   "currency": "EUR",
///   "city": "Paris",
///   "postalCode": "75001",
///   "category": "electronics",
///   "images": []
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if any field breaks a domain rule.
pub async fn create_ad_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateAdRequest>,
) -> Result<(StatusCode, Json<AdResponse>), AppError> {
    payload.validate()?;

    let ad = state
        .create_ad
        .execute(payload.into_command(user.user_id))
        .await?;

    Ok((StatusCode::CREATED, Json(AdResponse::from(&ad))))
}

/// Lists ads.
///
/// # Endpoint
///
/// `GET /api/v1/ads?sellerId=<uuid>&status=<DRAFT|PUBLISHED|SOLD>`
///
/// Without filters, returns the latest published ads.
pub async fn list_ads_handler(
    State(state): State<AppState>,
    Query(query): Query<AdsQuery>,
) -> Result<Json<Vec<AdResponse>>, AppError> {
    let ads = state.get_ads.execute(query.into_filter()?).await?;
    Ok(Json(ads.iter().map(AdResponse::from).collect()))
}

/// `GET /api/v1/ads/{id}`
pub async fn get_ad_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdResponse>, AppError> {
    let ad = state.get_ad.execute(id).await?;
    Ok(Json(AdResponse::from(&ad)))
}

/// Partially updates an ad.
///
/// # Endpoint
///
/// `PATCH /api/v1/ads/{id}`
///
/// # Errors
///
/// - 403 Forbidden if the caller is not the seller
/// - 400 Bad Request if the ad is sold or a field is invalid
/// - 409 Conflict if the ad changed concurrently
pub async fn update_ad_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAdRequest>,
) -> Result<Json<AdResponse>, AppError> {
    payload.validate()?;

    let ad = state
        .update_ad
        .execute(id, user.user_id, payload.into())
        .await?;
    Ok(Json(AdResponse::from(&ad)))
}

/// `PATCH /api/v1/ads/{id}/publish`
pub async fn publish_ad_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdResponse>, AppError> {
    let ad = state.publish_ad.execute(id, user.user_id).await?;
    Ok(Json(AdResponse::from(&ad)))
}

/// `PATCH /api/v1/ads/{id}/sold`
pub async fn mark_ad_as_sold_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdResponse>, AppError> {
    let ad = state.mark_ad_as_sold.execute(id, user.user_id).await?;
    Ok(Json(AdResponse::from(&ad)))
}
