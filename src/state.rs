//! Shared application state injected into all handlers.

use std::sync::Arc;

use mongodb::Database;

use crate::application::services::{
    CarService, OrderService, PaymentService, ReviewService, UserService,
};
use crate::infrastructure::identity::IdentityVerifier;

/// Process-scoped resources, built once at startup and cloned per request.
///
/// Services and the verifier sit behind `Arc`s; the database handle is the
/// driver's own cheap clone over one shared connection pool.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub user_service: Arc<UserService>,
    pub car_service: Arc<CarService>,
    pub order_service: Arc<OrderService>,
    pub review_service: Arc<ReviewService>,
    pub payment_service: Arc<PaymentService>,
    pub identity_verifier: Arc<dyn IdentityVerifier>,
}
