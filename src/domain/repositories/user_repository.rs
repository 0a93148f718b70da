//! Repository trait for user account data access.

use async_trait::async_trait;

use crate::domain::entities::{InsertReceipt, NewUser, UpdateReceipt, User, UserRole};
use crate::error::AppError;

/// Repository interface for the users collection.
///
/// Users are keyed by email; there is no deletion path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoUserRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_user: NewUser) -> Result<InsertReceipt, AppError>;

    /// Updates the profile matching `profile.email`, inserting it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert_by_email(&self, profile: NewUser) -> Result<UpdateReceipt, AppError>;

    /// Finds a user by email.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Sets the role of the user matching `email`.
    ///
    /// No upsert: a receipt with `matched_count: 0` means no such user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_role(&self, email: &str, role: UserRole) -> Result<UpdateReceipt, AppError>;
}
