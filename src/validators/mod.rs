//! Input normalization for untrusted request data.

pub mod pagination;

pub use pagination::*;
