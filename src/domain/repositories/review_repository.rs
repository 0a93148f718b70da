//! Repository trait for customer review data access.

use async_trait::async_trait;

use crate::domain::entities::{InsertReceipt, NewReview, Review};
use crate::error::AppError;

/// Repository interface for the customer reviews collection.
///
/// Reviews are append-only: created and listed, never updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoReviewRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Inserts a new review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_review: NewReview) -> Result<InsertReceipt, AppError>;

    /// Lists every review in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Review>, AppError>;
}
