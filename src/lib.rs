//! # City Car House
//!
//! REST backend for a car rental marketplace, built with Axum and MongoDB.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB repositories and the
//!   identity provider / payment processor clients
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - CRUD endpoints over four document collections (users, cars, orders, reviews)
//! - Bearer token verification delegated to the identity provider; anonymous
//!   callers are an explicit state, never an error
//! - Payment intent creation with the payment processor at checkout
//! - Admin role grants gated on the caller's stored role
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export MONGODB_URL="mongodb://localhost:27017"
//! export FIREBASE_API_KEY="AIza..."
//! export STRIPE_SECRET_KEY="sk_test_..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CarService, OrderService, PaymentService, ReviewService, UserService,
    };
    pub use crate::domain::entities::{Car, NewCar, NewOrder, NewReview, NewUser, Order, Review, User};
    pub use crate::domain::identity::Identity;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
