//! Error message constants used throughout the application.

// Client-facing errors
pub const ERR_INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

// Internal fault details (logged only)
pub const ERR_LISTING_PANICKED: &str = "Customer listing panicked";
pub const ERR_ENVELOPE_SERIALIZATION: &str = "Failed to serialize customer page";
pub const ERR_UNSUPPORTED_DATA_SOURCE: &str = "Unsupported DATA_SOURCE";
