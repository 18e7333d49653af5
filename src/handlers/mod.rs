//! HTTP request handlers organized by domain.

pub mod customer_handler;
pub mod health_handler;

pub use customer_handler::*;
pub use health_handler::*;
