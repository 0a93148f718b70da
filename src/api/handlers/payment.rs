//! Handlers for the checkout payment endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::car::CarResponse;
use crate::api::dto::payment::{CreatePaymentIntentRequest, PaymentIntentResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Loads the car shown on the payment page.
///
/// # Endpoint
///
/// `GET /payment/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no car matches the id and 400 Bad Request for
/// malformed ids.
pub async fn checkout_car_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CarResponse>, AppError> {
    let car = state.payment_service.checkout_car(&id).await?;

    Ok(Json(car.into()))
}

/// Creates a payment intent and returns its client secret.
///
/// # Endpoint
///
/// `POST /create-payment-intent`
///
/// The dollar price in the body is converted to minor units before the
/// processor is called; `{"price": 10}` charges 1000 cents.
pub async fn create_payment_intent_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    payload.validate()?;

    let client_secret = state.payment_service.create_intent(payload.price).await?;

    Ok(Json(PaymentIntentResponse { client_secret }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_support::StateBuilder;
    use crate::domain::entities::Car;
    use crate::infrastructure::payment::PaymentIntent;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum_test::TestServer;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[tokio::test]
    async fn test_checkout_car_found() {
        let oid = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();

        let mut builder = StateBuilder::new();
        builder
            .cars
            .expect_find_by_id()
            .withf(move |id| *id == oid)
            .times(1)
            .returning(|id| {
                Ok(Some(Car {
                    id: Some(id),
                    name: "Yaris".to_string(),
                    description: None,
                    image_url: None,
                    price: 12_500.0,
                }))
            });

        let app = Router::new()
            .route("/payment/{id}", get(checkout_car_handler))
            .with_state(builder.build().await);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/payment/507f1f77bcf86cd799439011").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["_id"], "507f1f77bcf86cd799439011");
        assert_eq!(body["name"], "Yaris");
    }

    #[tokio::test]
    async fn test_checkout_car_missing_is_404() {
        let mut builder = StateBuilder::new();
        builder
            .cars
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let app = Router::new()
            .route("/payment/{id}", get(checkout_car_handler))
            .with_state(builder.build().await);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/payment/507f1f77bcf86cd799439011").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_payment_intent_converts_price() {
        let mut builder = StateBuilder::new();
        builder
            .gateway
            .expect_create_payment_intent()
            .withf(|amount, currency| *amount == 1000 && currency == "usd")
            .times(1)
            .returning(|_, _| {
                Ok(PaymentIntent {
                    id: "pi_1".to_string(),
                    client_secret: "pi_1_secret_abc".to_string(),
                })
            });

        let app = Router::new()
            .route("/create-payment-intent", post(create_payment_intent_handler))
            .with_state(builder.build().await);
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/create-payment-intent")
            .json(&json!({"price": 10}))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({"clientSecret": "pi_1_secret_abc"})
        );
    }

    #[tokio::test]
    async fn test_create_payment_intent_rejects_non_positive_price() {
        let app = Router::new()
            .route("/create-payment-intent", post(create_payment_intent_handler))
            .with_state(StateBuilder::new().build().await);
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/create-payment-intent")
            .json(&json!({"price": 0}))
            .await;

        response.assert_status_bad_request();
    }
}
