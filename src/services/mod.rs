//! Services organized by domain concern.

pub mod customer_service;

pub use customer_service::CustomerService;
