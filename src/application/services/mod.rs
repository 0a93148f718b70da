//! Business logic services for the application layer.

use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::error::AppError;

pub mod car_service;
pub mod order_service;
pub mod payment_service;
pub mod review_service;
pub mod user_service;

pub use car_service::CarService;
pub use order_service::OrderService;
pub use payment_service::PaymentService;
pub use review_service::ReviewService;
pub use user_service::UserService;

/// Parses a path-supplied document id.
///
/// Malformed ids become a validation error instead of surfacing as a driver
/// exception deep inside a query.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::bad_request("Invalid id", json!({ "id": id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        assert!(parse_object_id("507f1f77bcf86cd799439011").is_ok());
        assert!(parse_object_id("507f1f77").is_err());
        assert!(parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }
}
