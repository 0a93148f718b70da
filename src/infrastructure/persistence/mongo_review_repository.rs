//! MongoDB implementation of the review repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::Database;
use mongodb::bson::doc;

use crate::domain::entities::{InsertReceipt, NewReview, Review};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

const COLLECTION: &str = "customer_review";

/// MongoDB repository for customer reviews.
pub struct MongoReviewRepository {
    reviews: Collection<Review>,
}

impl MongoReviewRepository {
    /// Creates a new repository over the customer reviews collection.
    pub fn new(db: &Database) -> Self {
        Self {
            reviews: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    async fn insert(&self, new_review: NewReview) -> Result<InsertReceipt, AppError> {
        let result = self
            .reviews
            .clone_with_type::<NewReview>()
            .insert_one(&new_review)
            .await?;

        Ok(result.into())
    }

    async fn list_all(&self) -> Result<Vec<Review>, AppError> {
        let cursor = self.reviews.find(doc! {}).await?;
        let reviews = cursor.try_collect().await?;

        Ok(reviews)
    }
}
