//! User account entity keyed by email.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Role stored on a user document.
///
/// Only `admin` carries meaning today; everyone else is a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Customer,
}

/// A marketplace user.
///
/// The email address is the natural key: signup inserts a document, profile
/// updates upsert on it, and orders reference it. There is no deletion path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl User {
    /// Returns true if the stored role is exactly `admin`.
    pub fn is_admin(&self) -> bool {
        self.role == Some(UserRole::Admin)
    }
}

/// Input data for creating or upserting a user.
///
/// Shared by signup (insert) and profile update (upsert by email) — the two
/// endpoints accept the same document shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<UserRole>) -> User {
        User {
            id: None,
            email: "drive@example.com".to_string(),
            display_name: Some("Drive R".to_string()),
            photo_url: None,
            role,
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(user(Some(UserRole::Admin)).is_admin());
        assert!(!user(Some(UserRole::Customer)).is_admin());
        assert!(!user(None).is_admin());
    }

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, r#""admin""#);

        let role: UserRole = serde_json::from_str(r#""customer""#).unwrap();
        assert_eq!(role, UserRole::Customer);
    }

    #[test]
    fn test_user_deserializes_without_optional_fields() {
        let user: User = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();
        assert_eq!(user.email, "a@b.com");
        assert!(user.role.is_none());
        assert!(!user.is_admin());
    }
}
