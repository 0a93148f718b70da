//! DTOs for order endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewOrder, Order, OrderPatch, OrderStatus};

/// Request body for `POST /customerOrder`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 200))]
    pub car_name: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    #[validate(length(max = 500))]
    pub address: Option<String>,

    #[validate(length(max = 30))]
    pub phone: Option<String>,

    pub status: Option<OrderStatus>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            email: request.email,
            car_name: request.car_name,
            price: request.price,
            address: request.address,
            phone: request.phone,
            status: request.status.unwrap_or_default(),
            paid: false,
        }
    }
}

/// Request body for `PUT /status/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub status: Option<OrderStatus>,
    pub paid: Option<bool>,
}

impl From<UpdateOrderStatusRequest> for OrderPatch {
    fn from(request: UpdateOrderStatusRequest) -> Self {
        Self {
            status: request.status,
            paid: request.paid,
        }
    }
}

/// Order document as returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: OrderStatus,
    pub paid: bool,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            email: order.email,
            car_name: order.car_name,
            price: order.price,
            address: order.address,
            phone: order.phone,
            status: order.status,
            paid: order.paid,
        }
    }
}
