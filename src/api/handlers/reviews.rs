//! Handlers for customer review endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::receipt::InsertReceiptResponse;
use crate::api::dto::review::{CreateReviewRequest, ReviewResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Submits a customer review.
///
/// # Endpoint
///
/// `POST /customerReview`
pub async fn create_review_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<Json<InsertReceiptResponse>, AppError> {
    payload.validate()?;

    let receipt = state.review_service.submit(payload.into()).await?;

    Ok(Json(receipt.into()))
}

/// Lists every review for the landing page.
///
/// # Endpoint
///
/// `GET /customerReview`
pub async fn review_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state.review_service.list().await?;

    Ok(Json(
        reviews.into_iter().map(ReviewResponse::from).collect(),
    ))
}
