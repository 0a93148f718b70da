//! Handlers for user account endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::receipt::{InsertReceiptResponse, UpdateReceiptResponse};
use crate::api::dto::user::{AdminStatusResponse, GrantAdminRequest, UserRequest, UserResponse};
use crate::domain::identity::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user on signup.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<Json<InsertReceiptResponse>, AppError> {
    payload.validate()?;

    let receipt = state.user_service.register(payload.into()).await?;

    Ok(Json(receipt.into()))
}

/// Upserts a user profile by email.
///
/// # Endpoint
///
/// `PUT /users`
///
/// A new email creates exactly one document; repeating the call with the
/// same email mutates it in place.
pub async fn upsert_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<Json<UpdateReceiptResponse>, AppError> {
    payload.validate()?;

    let receipt = state.user_service.upsert_profile(payload.into()).await?;

    Ok(Json(receipt.into()))
}

/// Promotes another account to admin.
///
/// # Endpoint
///
/// `PUT /users/admin`
///
/// The caller's identity comes from the identity middleware. Anonymous
/// callers and callers whose stored role is not admin both receive 403.
pub async fn grant_admin_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<GrantAdminRequest>,
) -> Result<Json<UpdateReceiptResponse>, AppError> {
    payload.validate()?;

    let receipt = state
        .user_service
        .grant_admin(&identity, &payload.admin_email)
        .await?;

    Ok(Json(receipt.into()))
}

/// Reports whether the account with this email is an admin.
///
/// # Endpoint
///
/// `GET /users/{email}`
///
/// Responds `{"admin": false}` when no such user exists.
pub async fn admin_status_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AdminStatusResponse>, AppError> {
    let admin = state.user_service.is_admin(&email).await?;

    Ok(Json(AdminStatusResponse { admin }))
}

/// Returns the full user document for a login lookup, or `null`.
///
/// # Endpoint
///
/// `GET /loginUser/{email}`
pub async fn login_user_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Option<UserResponse>>, AppError> {
    let user = state.user_service.find_by_email(&email).await?;

    Ok(Json(user.map(UserResponse::from)))
}
