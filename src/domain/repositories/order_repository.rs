//! Repository trait for customer order data access.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::{DeleteReceipt, InsertReceipt, NewOrder, Order, OrderPatch, UpdateReceipt};
use crate::error::AppError;

/// Repository interface for the customer orders collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoOrderRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts a new order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_order: NewOrder) -> Result<InsertReceipt, AppError>;

    /// Lists orders placed under the given email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Vec<Order>, AppError>;

    /// Lists every order in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Order>, AppError>;

    /// Applies a `$set` patch to the order matching `id`, upserting if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_by_id(&self, id: ObjectId, patch: OrderPatch)
        -> Result<UpdateReceipt, AppError>;

    /// Deletes an order by id.
    ///
    /// A nonexistent id yields `deleted_count: 0`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteReceipt, AppError>;
}
