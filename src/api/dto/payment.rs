//! DTOs for the payment intent endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /create-payment-intent`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentIntentRequest {
    /// Dollar price of the car being paid for.
    #[validate(range(min = 0.01, message = "Price must be positive"))]
    pub price: f64,
}

/// Response carrying the processor's client secret, passed through unchanged.
#[derive(Debug, Serialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}
