//! Checkout payment service.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::parse_object_id;
use crate::domain::entities::Car;
use crate::domain::repositories::CarRepository;
use crate::error::AppError;
use crate::infrastructure::payment::{PaymentGateway, to_minor_units};

/// All charges are made in this currency.
const CURRENCY: &str = "usd";

/// Service backing the checkout page: car lookup and payment intent creation.
pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
    cars: Arc<dyn CarRepository>,
}

impl PaymentService {
    /// Creates a new payment service.
    pub fn new(gateway: Arc<dyn PaymentGateway>, cars: Arc<dyn CarRepository>) -> Self {
        Self { gateway, cars }
    }

    /// Loads the car being paid for.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `id` is malformed and
    /// [`AppError::NotFound`] when no car matches it.
    pub async fn checkout_car(&self, id: &str) -> Result<Car, AppError> {
        let oid = parse_object_id(id)?;

        self.cars
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::not_found("Car not found", json!({ "id": id })))
    }

    /// Creates a payment intent for a dollar price and returns its client
    /// secret unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the payment processor call fails;
    /// the processor's message is logged, not leaked to the client.
    pub async fn create_intent(&self, price: f64) -> Result<String, AppError> {
        let amount = to_minor_units(price);

        let intent = self
            .gateway
            .create_payment_intent(amount, CURRENCY)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, amount, "payment intent creation failed");
                AppError::internal("Payment processor error", json!({}))
            })?;

        Ok(intent.client_secret)
    }
}
