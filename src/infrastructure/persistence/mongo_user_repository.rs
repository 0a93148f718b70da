//! MongoDB implementation of the user repository.

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::Database;
use mongodb::bson::{doc, to_bson, to_document};

use crate::domain::entities::{InsertReceipt, NewUser, UpdateReceipt, User, UserRole};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

const COLLECTION: &str = "users";

/// MongoDB repository for user accounts.
pub struct MongoUserRepository {
    users: Collection<User>,
}

impl MongoUserRepository {
    /// Creates a new repository over the users collection.
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<InsertReceipt, AppError> {
        let result = self
            .users
            .clone_with_type::<NewUser>()
            .insert_one(&new_user)
            .await?;

        Ok(result.into())
    }

    async fn upsert_by_email(&self, profile: NewUser) -> Result<UpdateReceipt, AppError> {
        let result = self
            .users
            .update_one(
                doc! { "email": &profile.email },
                doc! { "$set": to_document(&profile)? },
            )
            .upsert(true)
            .await?;

        Ok(result.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = self.users.find_one(doc! { "email": email }).await?;

        Ok(user)
    }

    async fn set_role(&self, email: &str, role: UserRole) -> Result<UpdateReceipt, AppError> {
        let result = self
            .users
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "role": to_bson(&role)? } },
            )
            .await?;

        Ok(result.into())
    }
}
