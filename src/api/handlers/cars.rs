//! Handlers for car catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::car::{CarResponse, CreateCarRequest};
use crate::api::dto::receipt::{DeleteReceiptResponse, InsertReceiptResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Adds a car listing from the admin dashboard.
///
/// # Endpoint
///
/// `POST /admin/addCar`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn add_car_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCarRequest>,
) -> Result<Json<InsertReceiptResponse>, AppError> {
    payload.validate()?;

    let receipt = state.car_service.add(payload.into()).await?;

    Ok(Json(receipt.into()))
}

/// Lists at most `limit` cars for the landing page.
///
/// # Endpoint
///
/// `GET /cars/bestCars/{limit}`
///
/// A non-numeric limit fails path extraction with 400 instead of reaching
/// the store.
pub async fn best_cars_handler(
    Path(limit): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CarResponse>>, AppError> {
    let cars = state.car_service.best(limit).await?;

    Ok(Json(cars.into_iter().map(CarResponse::from).collect()))
}

/// Deletes a car listing.
///
/// # Endpoint
///
/// `DELETE /deleteCar/{id}`
///
/// Deleting a nonexistent id reports `deletedCount: 0`, not an error.
pub async fn delete_car_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteReceiptResponse>, AppError> {
    let receipt = state.car_service.delete(&id).await?;

    Ok(Json(receipt.into()))
}
