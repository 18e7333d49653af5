//! Repository layer for dataset access.
//!
//! This module separates the listing logic (services) from the store that
//! holds the records, so a fixture, a database or a remote service can back
//! the same endpoint.

pub mod customer_repository;

pub use customer_repository::{CustomerRepository, FixtureCustomerRepository, RepositoryError};
