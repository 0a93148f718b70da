//! Customer review service.

use std::sync::Arc;

use crate::domain::entities::{InsertReceipt, NewReview, Review};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

/// Service for customer reviews.
pub struct ReviewService {
    repository: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }

    /// Submits a review.
    pub async fn submit(&self, new_review: NewReview) -> Result<InsertReceipt, AppError> {
        self.repository.insert(new_review).await
    }

    /// Lists every review for the landing page.
    pub async fn list(&self) -> Result<Vec<Review>, AppError> {
        self.repository.list_all().await
    }
}
