//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository and
//! gateway calls, validation, and business rules. Services consume the
//! domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Accounts, roles, admin grants
//! - [`services::car_service::CarService`] - Car catalog
//! - [`services::order_service::OrderService`] - Customer orders
//! - [`services::review_service::ReviewService`] - Customer reviews
//! - [`services::payment_service::PaymentService`] - Checkout payments

pub mod services;
