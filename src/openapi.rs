use utoipa::OpenApi;

use crate::models::{Customer, ErrorResponse, HealthResponse, PaginatedResponse};

/// OpenAPI documentation for the Customer API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer API",
        version = "0.1.0",
        description = "Read-only customer listing with page/limit pagination.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Customers", description = "Customer listing endpoints")
    ),
    paths(
        crate::handlers::list_customers,
        crate::handlers::health_check
    ),
    components(
        schemas(
            Customer,
            PaginatedResponse<Customer>,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
