//! Route path constants.

pub const PATH_CUSTOMERS: &str = "/customers";
pub const PATH_HEALTH: &str = "/health";
pub const PATH_OPENAPI: &str = "/api-docs/openapi.json";
