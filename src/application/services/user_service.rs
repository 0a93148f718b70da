//! User account service: signup, profile upserts, and admin grants.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{InsertReceipt, NewUser, UpdateReceipt, User, UserRole};
use crate::domain::identity::Identity;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Fixed denial message for the admin-grant endpoint, kept verbatim from the
/// contract the frontend already handles.
const GRANT_DENIED: &str = "You dont have an access to make admin";

/// Service for user accounts and role management.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Registers a user on signup.
    pub async fn register(&self, new_user: NewUser) -> Result<InsertReceipt, AppError> {
        self.repository.insert(new_user).await
    }

    /// Updates a profile by email, creating the document if it is missing.
    pub async fn upsert_profile(&self, profile: NewUser) -> Result<UpdateReceipt, AppError> {
        self.repository.upsert_by_email(profile).await
    }

    /// Looks up a user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.repository.find_by_email(email).await
    }

    /// Returns true iff the stored role for `email` is exactly admin.
    ///
    /// A missing user is not an admin.
    pub async fn is_admin(&self, email: &str) -> Result<bool, AppError> {
        let user = self.repository.find_by_email(email).await?;
        Ok(user.is_some_and(|u| u.is_admin()))
    }

    /// Promotes `target_email` to admin on behalf of `actor`.
    ///
    /// The acting identity must be verified and its stored role must be
    /// admin. Both failure modes respond 403 with the same fixed message.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when the caller is anonymous or not
    /// an admin, [`AppError::Internal`] on database errors.
    pub async fn grant_admin(
        &self,
        actor: &Identity,
        target_email: &str,
    ) -> Result<UpdateReceipt, AppError> {
        let Some(actor_email) = actor.email() else {
            return Err(AppError::forbidden(GRANT_DENIED, json!({})));
        };

        if !self.is_admin(actor_email).await? {
            return Err(AppError::forbidden(
                GRANT_DENIED,
                json!({ "requester": actor_email }),
            ));
        }

        self.repository
            .set_role(target_email, UserRole::Admin)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;

    fn stored_user(email: &str, role: Option<UserRole>) -> User {
        User {
            id: None,
            email: email.to_string(),
            display_name: None,
            photo_url: None,
            role,
        }
    }

    fn verified(email: &str) -> Identity {
        Identity::Verified {
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_grant_admin_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "boss@example.com")
            .times(1)
            .returning(|email| Ok(Some(stored_user(email, Some(UserRole::Admin)))));

        mock_repo
            .expect_set_role()
            .withf(|email, role| email == "new-admin@example.com" && *role == UserRole::Admin)
            .times(1)
            .returning(|_, _| {
                Ok(UpdateReceipt {
                    matched_count: 1,
                    modified_count: 1,
                    upserted_id: None,
                })
            });

        let service = UserService::new(Arc::new(mock_repo));

        let receipt = service
            .grant_admin(&verified("boss@example.com"), "new-admin@example.com")
            .await
            .unwrap();

        assert_eq!(receipt.modified_count, 1);
    }

    #[tokio::test]
    async fn test_grant_admin_anonymous_is_forbidden() {
        // No repository expectations: an anonymous caller must be rejected
        // before any store access.
        let service = UserService::new(Arc::new(MockUserRepository::new()));

        let result = service
            .grant_admin(&Identity::Anonymous, "new-admin@example.com")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_grant_admin_non_admin_is_forbidden() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(stored_user(email, Some(UserRole::Customer)))));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .grant_admin(&verified("plain@example.com"), "new-admin@example.com")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_grant_admin_unknown_requester_is_forbidden() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .grant_admin(&verified("ghost@example.com"), "new-admin@example.com")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_is_admin_missing_user_is_false() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(!service.is_admin("nobody@example.com").await.unwrap());
    }
}
