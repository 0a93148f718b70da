//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserRole};

/// Request body for signup (`POST /users`) and profile upsert (`PUT /users`).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 120))]
    pub display_name: Option<String>,

    #[validate(url(message = "Invalid photo URL"))]
    pub photo_url: Option<String>,

    pub role: Option<UserRole>,
}

impl From<UserRequest> for NewUser {
    fn from(request: UserRequest) -> Self {
        Self {
            email: request.email,
            display_name: request.display_name,
            photo_url: request.photo_url,
            role: request.role,
        }
    }
}

/// Request body for the admin grant endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct GrantAdminRequest {
    #[serde(rename = "adminEmail")]
    #[validate(email(message = "Invalid email address"))]
    pub admin_email: String,
}

/// Response for `GET /users/{email}`: is the account an admin.
#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

/// Full user document returned by `GET /loginUser/{email}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            email: user.email,
            display_name: user.display_name,
            photo_url: user.photo_url,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_admin_request_wire_name() {
        let request: GrantAdminRequest =
            serde_json::from_str(r#"{"adminEmail": "next@example.com"}"#).unwrap();
        assert_eq!(request.admin_email, "next@example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_user_request_rejects_bad_email() {
        let request: UserRequest = serde_json::from_str(r#"{"email": "nope"}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
