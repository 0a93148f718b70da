//! MongoDB implementation of the car repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::Database;
use mongodb::bson::{doc, oid::ObjectId};

use crate::domain::entities::{Car, DeleteReceipt, InsertReceipt, NewCar};
use crate::domain::repositories::CarRepository;
use crate::error::AppError;

const COLLECTION: &str = "cars";

/// MongoDB repository for car listings.
pub struct MongoCarRepository {
    cars: Collection<Car>,
}

impl MongoCarRepository {
    /// Creates a new repository over the cars collection.
    pub fn new(db: &Database) -> Self {
        Self {
            cars: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl CarRepository for MongoCarRepository {
    async fn insert(&self, new_car: NewCar) -> Result<InsertReceipt, AppError> {
        let result = self
            .cars
            .clone_with_type::<NewCar>()
            .insert_one(&new_car)
            .await?;

        Ok(result.into())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Car>, AppError> {
        let cursor = self.cars.find(doc! {}).limit(limit).await?;
        let cars = cursor.try_collect().await?;

        Ok(cars)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Car>, AppError> {
        let car = self.cars.find_one(doc! { "_id": id }).await?;

        Ok(car)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteReceipt, AppError> {
        let result = self.cars.delete_one(doc! { "_id": id }).await?;

        Ok(result.into())
    }
}
