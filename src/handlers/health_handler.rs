//! Liveness and API description handlers.

use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

/// Serve the generated OpenAPI document.
pub async fn openapi_spec() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
