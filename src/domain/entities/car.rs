//! Car listing entity.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A car offered on the marketplace.
///
/// Created by admins, read by the listing and checkout pages, deleted by id.
/// There is no update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: f64,
}

/// Input data for creating a car listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_wire_field_names() {
        let car = Car {
            id: Some(ObjectId::new()),
            name: "Toyota Yaris".to_string(),
            description: None,
            image_url: Some("https://cdn.example.com/yaris.jpg".to_string()),
            price: 12_500.0,
        };

        let value = serde_json::to_value(&car).unwrap();
        assert!(value.get("_id").is_some());
        assert_eq!(value["imageUrl"], "https://cdn.example.com/yaris.jpg");
        assert_eq!(value["price"], 12_500.0);
        assert!(value.get("description").is_none());
    }
}
