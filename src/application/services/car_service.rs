//! Car catalog service.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::parse_object_id;
use crate::domain::entities::{Car, DeleteReceipt, InsertReceipt, NewCar};
use crate::domain::repositories::CarRepository;
use crate::error::AppError;

/// Service for the car catalog: admin adds, public listing, admin deletes.
pub struct CarService {
    repository: Arc<dyn CarRepository>,
}

impl CarService {
    /// Creates a new car service.
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self { repository }
    }

    /// Adds a car listing.
    pub async fn add(&self, new_car: NewCar) -> Result<InsertReceipt, AppError> {
        self.repository.insert(new_car).await
    }

    /// Returns at most `limit` cars for the landing page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for negative limits.
    pub async fn best(&self, limit: i64) -> Result<Vec<Car>, AppError> {
        if limit < 0 {
            return Err(AppError::bad_request(
                "Limit must not be negative",
                json!({ "limit": limit }),
            ));
        }

        self.repository.list(limit).await
    }

    /// Deletes a car by its path-supplied id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `id` is not a valid ObjectId.
    pub async fn delete(&self, id: &str) -> Result<DeleteReceipt, AppError> {
        let id = parse_object_id(id)?;
        self.repository.delete_by_id(id).await
    }
}
