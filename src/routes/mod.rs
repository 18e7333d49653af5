use actix_web::http::Method;
use actix_web::web;

use crate::constants::{PATH_CUSTOMERS, PATH_HEALTH, PATH_OPENAPI};
use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route(PATH_HEALTH, web::get().to(handlers::health_check))
        // OpenAPI document
        .route(PATH_OPENAPI, web::get().to(handlers::openapi_spec))
        // Customer listing with pagination, plus its CORS preflight
        .service(
            web::resource(PATH_CUSTOMERS)
                .route(web::get().to(handlers::list_customers))
                .route(web::method(Method::OPTIONS).to(handlers::customers_preflight)),
        );
}
