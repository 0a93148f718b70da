//! MongoDB implementation of the order repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::Database;
use mongodb::bson::{doc, oid::ObjectId, to_document};

use crate::domain::entities::{
    DeleteReceipt, InsertReceipt, NewOrder, Order, OrderPatch, UpdateReceipt,
};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

const COLLECTION: &str = "customer_order";

/// MongoDB repository for customer orders.
pub struct MongoOrderRepository {
    orders: Collection<Order>,
}

impl MongoOrderRepository {
    /// Creates a new repository over the customer orders collection.
    pub fn new(db: &Database) -> Self {
        Self {
            orders: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    async fn insert(&self, new_order: NewOrder) -> Result<InsertReceipt, AppError> {
        let result = self
            .orders
            .clone_with_type::<NewOrder>()
            .insert_one(&new_order)
            .await?;

        Ok(result.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Order>, AppError> {
        let cursor = self.orders.find(doc! { "email": email }).await?;
        let orders = cursor.try_collect().await?;

        Ok(orders)
    }

    async fn list_all(&self) -> Result<Vec<Order>, AppError> {
        let cursor = self.orders.find(doc! {}).await?;
        let orders = cursor.try_collect().await?;

        Ok(orders)
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        patch: OrderPatch,
    ) -> Result<UpdateReceipt, AppError> {
        let result = self
            .orders
            .update_one(doc! { "_id": id }, doc! { "$set": to_document(&patch)? })
            .upsert(true)
            .await?;

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteReceipt, AppError> {
        let result = self.orders.delete_one(doc! { "_id": id }).await?;

        Ok(result.into())
    }
}
