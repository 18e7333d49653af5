//! Request models for API endpoints.

pub mod customer;

pub use customer::*;
