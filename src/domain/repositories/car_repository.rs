//! Repository trait for car listing data access.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::{Car, DeleteReceipt, InsertReceipt, NewCar};
use crate::error::AppError;

/// Repository interface for the cars collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoCarRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Inserts a new car listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_car: NewCar) -> Result<InsertReceipt, AppError>;

    /// Lists at most `limit` cars.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, limit: i64) -> Result<Vec<Car>, AppError>;

    /// Finds a car by its store-generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Car>, AppError>;

    /// Deletes a car by id.
    ///
    /// A nonexistent id yields `deleted_count: 0`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteReceipt, AppError>;
}
