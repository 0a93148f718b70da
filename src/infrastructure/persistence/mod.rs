//! MongoDB repository implementations.
//!
//! Concrete implementations of domain repository traits over typed
//! `mongodb::Collection<T>` handles. Collection names match the deployed
//! database layout.
//!
//! # Repositories
//!
//! - [`MongoUserRepository`] - `users` collection
//! - [`MongoCarRepository`] - `cars` collection
//! - [`MongoOrderRepository`] - `customer_order` collection
//! - [`MongoReviewRepository`] - `customer_review` collection

pub mod mongo_car_repository;
pub mod mongo_order_repository;
pub mod mongo_review_repository;
pub mod mongo_user_repository;

pub use mongo_car_repository::MongoCarRepository;
pub use mongo_order_repository::MongoOrderRepository;
pub use mongo_review_repository::MongoReviewRepository;
pub use mongo_user_repository::MongoUserRepository;
