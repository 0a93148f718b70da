//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, external client construction, dependency
//! wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::identity::{FirebaseVerifier, IdentityVerifier};
use crate::infrastructure::payment::{PaymentGateway, StripeGateway};
use crate::infrastructure::persistence::{
    MongoCarRepository, MongoOrderRepository, MongoReviewRepository, MongoUserRepository,
};
use crate::application::services::{
    CarService, OrderService, PaymentService, ReviewService, UserService,
};
use crate::domain::repositories::CarRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use mongodb::Client;
use mongodb::bson::doc;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client (one per process, cloned into repositories)
/// - Identity provider and payment processor clients
/// - Services with their repositories
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The store is unreachable at startup
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = Client::with_uri_str(&config.mongodb_url).await?;
    let db = client.database(&config.db_name);

    // The driver connects lazily; ping now so a bad URL fails at startup
    // instead of on the first request.
    db.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("Connected to database");

    let user_repository = Arc::new(MongoUserRepository::new(&db));
    let car_repository: Arc<dyn CarRepository> = Arc::new(MongoCarRepository::new(&db));
    let order_repository = Arc::new(MongoOrderRepository::new(&db));
    let review_repository = Arc::new(MongoReviewRepository::new(&db));

    let identity_verifier: Arc<dyn IdentityVerifier> =
        Arc::new(FirebaseVerifier::new(config.firebase_api_key.clone())?);
    let payment_gateway: Arc<dyn PaymentGateway> =
        Arc::new(StripeGateway::new(config.stripe_secret_key.clone())?);

    let state = AppState {
        db,
        user_service: Arc::new(UserService::new(user_repository)),
        car_service: Arc::new(CarService::new(car_repository.clone())),
        order_service: Arc::new(OrderService::new(order_repository)),
        review_service: Arc::new(ReviewService::new(review_repository)),
        payment_service: Arc::new(PaymentService::new(payment_gateway, car_repository)),
        identity_verifier,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
