//! Payment processor client for creating payment intents.
//!
//! One call: create a payment intent for an amount in minor units and hand
//! the resulting client secret back to the browser. No idempotency keys and
//! no retries; a failed request surfaces the processor's error message.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const PAYMENT_INTENTS_ENDPOINT: &str = "https://api.stripe.com/v1/payment_intents";

/// Failure modes of payment intent creation.
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment processor request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("payment processor rejected the request: {0}")]
    Rejected(String),
}

/// A created payment intent.
///
/// `client_secret` is returned to the browser to complete the charge.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Converts a dollar price into integer minor units (cents).
///
/// Rounds to the nearest cent; the processor only accepts integers.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Creates payment intents with an external payment processor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a payment intent for `amount` minor units of `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] when the processor is unreachable or rejects
    /// the request.
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError>;
}

// ── Response types ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

// ── Real implementation ─────────────────────────────────────────────────────

/// Stripe payment intents client.
///
/// Automatic payment methods are enabled on every intent, matching the
/// checkout flow the frontend expects.
pub struct StripeGateway {
    http: reqwest::Client,
    secret_key: String,
}

impl StripeGateway {
    /// Creates a new gateway authenticated by the account's secret key.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(secret_key: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("carhouse")
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self { http, secret_key })
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        let amount = amount.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("currency", currency),
            ("automatic_payment_methods[enabled]", "true"),
        ];

        let response = self
            .http
            .post(PAYMENT_INTENTS_ENDPOINT)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = match response.json::<ApiError>().await {
                Ok(body) => body
                    .error
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
                Err(_) => "unknown error".to_string(),
            };
            return Err(PaymentError::Rejected(message));
        }

        Ok(response.json::<PaymentIntent>().await?)
    }
}
