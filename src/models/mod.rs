//! Data models organized by type.

pub mod customer;
pub mod requests;
pub mod responses;

pub use customer::*;
pub use requests::*;
pub use responses::*;
