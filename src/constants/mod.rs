//! Application constants module.
//!
//! This module centralizes the constant strings and numbers used throughout the
//! application: error messages, pagination defaults and route paths.

pub mod errors;
pub mod pagination;
pub mod routes;

pub use errors::*;
pub use pagination::*;
pub use routes::*;
