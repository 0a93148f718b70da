//! Customer order service.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::parse_object_id;
use crate::domain::entities::{
    DeleteReceipt, InsertReceipt, NewOrder, Order, OrderPatch, UpdateReceipt,
};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// Service for customer orders: checkout, listing, status updates, deletion.
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Places an order at checkout.
    pub async fn place(&self, new_order: NewOrder) -> Result<InsertReceipt, AppError> {
        self.repository.insert(new_order).await
    }

    /// Lists the orders placed under `email`.
    pub async fn for_customer(&self, email: &str) -> Result<Vec<Order>, AppError> {
        self.repository.find_by_email(email).await
    }

    /// Lists every order, for the admin dashboard.
    pub async fn all(&self) -> Result<Vec<Order>, AppError> {
        self.repository.list_all().await
    }

    /// Applies a status patch to the order with the path-supplied id.
    ///
    /// Upsert semantics: patching an id with no matching document inserts
    /// one carrying only the patched fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `id` is malformed or the patch
    /// is empty (the store rejects an empty `$set`).
    pub async fn update_status(
        &self,
        id: &str,
        patch: OrderPatch,
    ) -> Result<UpdateReceipt, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request("No fields to update", json!({})));
        }

        let id = parse_object_id(id)?;
        self.repository.update_by_id(id, patch).await
    }

    /// Deletes an order by its path-supplied id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `id` is not a valid ObjectId.
    pub async fn delete(&self, id: &str) -> Result<DeleteReceipt, AppError> {
        let id = parse_object_id(id)?;
        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::OrderStatus;
    use crate::domain::repositories::MockOrderRepository;

    #[tokio::test]
    async fn test_update_status_rejects_empty_patch() {
        let service = OrderService::new(Arc::new(MockOrderRepository::new()));

        let patch = OrderPatch {
            status: None,
            paid: None,
        };
        let result = service
            .update_status("507f1f77bcf86cd799439011", patch)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_status_forwards_patch() {
        let mut mock_repo = MockOrderRepository::new();

        mock_repo
            .expect_update_by_id()
            .withf(|_, patch| patch.status == Some(OrderStatus::Shipped))
            .times(1)
            .returning(|_, _| {
                Ok(UpdateReceipt {
                    matched_count: 1,
                    modified_count: 1,
                    upserted_id: None,
                })
            });

        let service = OrderService::new(Arc::new(mock_repo));

        let patch = OrderPatch {
            status: Some(OrderStatus::Shipped),
            paid: None,
        };
        let receipt = service
            .update_status("507f1f77bcf86cd799439011", patch)
            .await
            .unwrap();

        assert_eq!(receipt.matched_count, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_order_reports_zero() {
        let mut mock_repo = MockOrderRepository::new();

        mock_repo
            .expect_delete_by_id()
            .times(1)
            .returning(|_| Ok(DeleteReceipt { deleted_count: 0 }));

        let service = OrderService::new(Arc::new(mock_repo));

        let receipt = service.delete("507f1f77bcf86cd799439011").await.unwrap();

        assert_eq!(receipt.deleted_count, 0);
    }

    #[tokio::test]
    async fn test_delete_rejects_malformed_id() {
        let service = OrderService::new(Arc::new(MockOrderRepository::new()));

        let result = service.delete("garbage").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }
}
