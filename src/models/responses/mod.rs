//! Response models for API endpoints.

pub mod api;
pub mod pagination;

pub use api::*;
pub use pagination::*;
