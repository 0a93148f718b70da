//! DTOs for car endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Car, NewCar};

/// Request body for `POST /admin/addCar`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

impl From<CreateCarRequest> for NewCar {
    fn from(request: CreateCarRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            image_url: request.image_url,
            price: request.price,
        }
    }
}

/// Car document as returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: f64,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: car.name,
            description: car.description,
            image_url: car.image_url,
            price: car.price,
        }
    }
}
