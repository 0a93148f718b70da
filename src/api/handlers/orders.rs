//! Handlers for customer order endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::order::{CreateOrderRequest, OrderResponse, UpdateOrderStatusRequest};
use crate::api::dto::receipt::{
    DeleteReceiptResponse, InsertReceiptResponse, UpdateReceiptResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Places a customer order at checkout.
///
/// # Endpoint
///
/// `POST /customerOrder`
pub async fn create_order_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<InsertReceiptResponse>, AppError> {
    payload.validate()?;

    let receipt = state.order_service.place(payload.into()).await?;

    Ok(Json(receipt.into()))
}

/// Lists the caller's orders by email.
///
/// # Endpoint
///
/// `GET /myOrder/{email}`
pub async fn my_orders_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state.order_service.for_customer(&email).await?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// Lists every order for the admin dashboard.
///
/// # Endpoint
///
/// `GET /allOrder`
pub async fn all_orders_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state.order_service.all().await?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// Applies a status patch to an order, upserting when the id is unknown.
///
/// # Endpoint
///
/// `PUT /status/{id}`
pub async fn update_order_status_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<Json<UpdateReceiptResponse>, AppError> {
    let receipt = state
        .order_service
        .update_status(&id, payload.into())
        .await?;

    Ok(Json(receipt.into()))
}

/// Deletes an order.
///
/// # Endpoint
///
/// `DELETE /deleteOrder/{id}`
///
/// Deleting a nonexistent id reports `deletedCount: 0`, not an error.
pub async fn delete_order_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteReceiptResponse>, AppError> {
    let receipt = state.order_service.delete(&id).await?;

    Ok(Json(receipt.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_support::StateBuilder;
    use crate::domain::entities::{DeleteReceipt, InsertReceipt, Order, OrderStatus, UpdateReceipt};
    use axum::Router;
    use axum::routing::{delete, get, post, put};
    use axum_test::TestServer;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    fn order(email: &str) -> Order {
        Order {
            id: Some(ObjectId::new()),
            email: email.to_string(),
            car_name: Some("Yaris".to_string()),
            price: Some(12_500.0),
            address: None,
            phone: None,
            status: OrderStatus::Pending,
            paid: false,
        }
    }

    #[tokio::test]
    async fn test_create_order_returns_receipt() {
        let mut builder = StateBuilder::new();
        builder
            .orders
            .expect_insert()
            .withf(|new_order| {
                new_order.email == "buyer@example.com" && new_order.status == OrderStatus::Pending
            })
            .times(1)
            .returning(|_| {
                Ok(InsertReceipt {
                    inserted_id: "61a1b2c3d4e5f6a7b8c9d0e2".to_string(),
                })
            });

        let app = Router::new()
            .route("/customerOrder", post(create_order_handler))
            .with_state(builder.build().await);
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/customerOrder")
            .json(&json!({"email": "buyer@example.com", "carName": "Yaris"}))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<serde_json::Value>()["insertedId"],
            "61a1b2c3d4e5f6a7b8c9d0e2"
        );
    }

    #[tokio::test]
    async fn test_my_orders_filters_by_email() {
        let mut builder = StateBuilder::new();
        builder
            .orders
            .expect_find_by_email()
            .withf(|email| email == "buyer@example.com")
            .times(1)
            .returning(|email| Ok(vec![order(email)]));

        let app = Router::new()
            .route("/myOrder/{email}", get(my_orders_handler))
            .with_state(builder.build().await);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/myOrder/buyer@example.com").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["email"], "buyer@example.com");
        assert_eq!(body[0]["status"], "pending");
    }

    #[tokio::test]
    async fn test_all_orders_returns_everything() {
        let mut builder = StateBuilder::new();
        builder
            .orders
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![order("a@example.com"), order("b@example.com")]));

        let app = Router::new()
            .route("/allOrder", get(all_orders_handler))
            .with_state(builder.build().await);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/allOrder").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<serde_json::Value>().as_array().unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_update_status_upserts() {
        let mut builder = StateBuilder::new();
        builder
            .orders
            .expect_update_by_id()
            .withf(|_, patch| patch.status == Some(OrderStatus::Shipped))
            .times(1)
            .returning(|_, _| {
                Ok(UpdateReceipt {
                    matched_count: 0,
                    modified_count: 0,
                    upserted_id: Some("507f1f77bcf86cd799439011".to_string()),
                })
            });

        let app = Router::new()
            .route("/status/{id}", put(update_order_status_handler))
            .with_state(builder.build().await);
        let server = TestServer::new(app).unwrap();

        let response = server
            .put("/status/507f1f77bcf86cd799439011")
            .json(&json!({"status": "shipped"}))
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["matchedCount"], 0);
        assert_eq!(body["upsertedId"], "507f1f77bcf86cd799439011");
    }

    #[tokio::test]
    async fn test_update_status_empty_patch_is_400() {
        let app = Router::new()
            .route("/status/{id}", put(update_order_status_handler))
            .with_state(StateBuilder::new().build().await);
        let server = TestServer::new(app).unwrap();

        let response = server
            .put("/status/507f1f77bcf86cd799439011")
            .json(&json!({}))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_delete_missing_order_reports_zero() {
        let mut builder = StateBuilder::new();
        builder
            .orders
            .expect_delete_by_id()
            .times(1)
            .returning(|_| Ok(DeleteReceipt { deleted_count: 0 }));

        let app = Router::new()
            .route("/deleteOrder/{id}", delete(delete_order_handler))
            .with_state(builder.build().await);
        let server = TestServer::new(app).unwrap();

        let response = server
            .delete("/deleteOrder/507f1f77bcf86cd799439011")
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["deletedCount"], 0);
    }
}
