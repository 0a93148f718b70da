//! HTTP middleware for request processing.
//!
//! Provides identity resolution and observability middleware.

pub mod identity;
pub mod tracing;
