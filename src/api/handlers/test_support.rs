//! Helpers for handler tests: application state wired to mock repositories.

use std::sync::Arc;

use mongodb::{Client, Database};

use crate::application::services::{
    CarService, OrderService, PaymentService, ReviewService, UserService,
};
use crate::domain::repositories::{
    CarRepository, MockCarRepository, MockOrderRepository, MockReviewRepository,
    MockUserRepository,
};
use crate::infrastructure::identity::MockIdentityVerifier;
use crate::infrastructure::payment::MockPaymentGateway;
use crate::state::AppState;

/// Collects per-test mock expectations, then assembles an [`AppState`].
pub struct StateBuilder {
    pub users: MockUserRepository,
    pub cars: MockCarRepository,
    pub orders: MockOrderRepository,
    pub reviews: MockReviewRepository,
    pub gateway: MockPaymentGateway,
    pub verifier: MockIdentityVerifier,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            users: MockUserRepository::new(),
            cars: MockCarRepository::new(),
            orders: MockOrderRepository::new(),
            reviews: MockReviewRepository::new(),
            gateway: MockPaymentGateway::new(),
            verifier: MockIdentityVerifier::new(),
        }
    }

    pub async fn build(self) -> AppState {
        let cars: Arc<dyn CarRepository> = Arc::new(self.cars);

        AppState {
            db: test_database().await,
            user_service: Arc::new(UserService::new(Arc::new(self.users))),
            car_service: Arc::new(CarService::new(cars.clone())),
            order_service: Arc::new(OrderService::new(Arc::new(self.orders))),
            review_service: Arc::new(ReviewService::new(Arc::new(self.reviews))),
            payment_service: Arc::new(PaymentService::new(Arc::new(self.gateway), cars)),
            identity_verifier: Arc::new(self.verifier),
        }
    }
}

/// A database handle that never reaches a live server.
///
/// The driver connects lazily, so constructing the handle is free; the short
/// server-selection timeout keeps any accidental query from hanging a test.
pub async fn test_database() -> Database {
    Client::with_uri_str(
        "mongodb://127.0.0.1:27017/?serverSelectionTimeoutMS=200&connectTimeoutMS=200",
    )
    .await
    .unwrap()
    .database("carhouse_test")
}
