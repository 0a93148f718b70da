#![allow(dead_code)]

use std::sync::Arc;

use carhouse::application::services::{
    CarService, OrderService, PaymentService, ReviewService, UserService,
};
use carhouse::domain::repositories::CarRepository;
use carhouse::infrastructure::identity::{FirebaseVerifier, IdentityVerifier};
use carhouse::infrastructure::payment::{PaymentGateway, StripeGateway};
use carhouse::infrastructure::persistence::{
    MongoCarRepository, MongoOrderRepository, MongoReviewRepository, MongoUserRepository,
};
use carhouse::state::AppState;
use mongodb::Client;

/// Builds real application state over a lazily-connecting store handle.
///
/// No MongoDB server is required: the driver only dials out when a handler
/// actually issues a query, and the smoke tests stick to routes that are
/// rejected before any store or third-party call.
pub async fn create_test_state() -> AppState {
    let client = Client::with_uri_str(
        "mongodb://127.0.0.1:27017/?serverSelectionTimeoutMS=200&connectTimeoutMS=200",
    )
    .await
    .unwrap();
    let db = client.database("carhouse_smoke");

    let user_repo = Arc::new(MongoUserRepository::new(&db));
    let car_repo: Arc<dyn CarRepository> = Arc::new(MongoCarRepository::new(&db));
    let order_repo = Arc::new(MongoOrderRepository::new(&db));
    let review_repo = Arc::new(MongoReviewRepository::new(&db));

    let verifier: Arc<dyn IdentityVerifier> =
        Arc::new(FirebaseVerifier::new("test-api-key".to_string()).unwrap());
    let gateway: Arc<dyn PaymentGateway> =
        Arc::new(StripeGateway::new("sk_test_smoke".to_string()).unwrap());

    AppState {
        db,
        user_service: Arc::new(UserService::new(user_repo)),
        car_service: Arc::new(CarService::new(car_repo.clone())),
        order_service: Arc::new(OrderService::new(order_repo)),
        review_service: Arc::new(ReviewService::new(review_repo)),
        payment_service: Arc::new(PaymentService::new(gateway, car_repo)),
        identity_verifier: verifier,
    }
}
