//! Handlers for registration and login.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user account.
///
/// # Endpoint
///
/// `POST /api/v1/auth/register`
///
/// # Errors
///
/// Returns 400 Bad Request for a weak password, a malformed email, invalid
/// names, or an email that is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    payload.validate()?;

    let user = state.register_user.execute(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::from(&user))))
}

/// Exchanges credentials for an access/refresh token pair.
///
/// # Endpoint
///
/// `POST /api/v1/auth/login`
///
/// # Errors
///
/// Returns 400 Bad Request with the same message for an unknown email and
/// a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let result = state.login.execute(payload.into()).await?;
    Ok(Json(result.into()))
}
