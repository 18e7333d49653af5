//! Customer listing handlers.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use actix_web::http::header::{
    ContentType, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use actix_web::{web, HttpRequest, HttpResponse};
use futures::FutureExt;
use log::{debug, warn};

use crate::constants::{ERR_ENVELOPE_SERIALIZATION, ERR_LISTING_PANICKED, MAX_PAGE_SIZE};
use crate::errors::ApiError;
use crate::models::CustomerListQuery;
use crate::services::CustomerService;
use crate::validators::resolve_page_request;

/// List customers one page at a time
///
/// `page` and `limit` are never rejected: missing or non-numeric values fall back
/// to 1 and 10, and out-of-range values are clamped (limit to at most 50).
#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customers",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1, min: 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default: 10, range: 1-50)")
    ),
    responses(
        (status = 200, description = "Page of customers", body = crate::models::PaginatedResponse<crate::models::Customer>),
        (status = 500, description = "Internal server error", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_customers(
    customer_service: web::Data<CustomerService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let query = CustomerListQuery::from_query_string(req.query_string()).unwrap_or_else(|e| {
        warn!("Ignoring undecodable query string: {}", e);
        CustomerListQuery::default()
    });

    let page_request =
        resolve_page_request(query.page.as_deref(), query.limit.as_deref(), MAX_PAGE_SIZE);
    debug!(
        "Resolved customer page request: page={} limit={}",
        page_request.page, page_request.limit
    );

    let envelope = AssertUnwindSafe(customer_service.list_customers(page_request))
        .catch_unwind()
        .await
        .map_err(|panic| {
            ApiError::Assembly(format!(
                "{}: {}",
                ERR_LISTING_PANICKED,
                panic_message(panic.as_ref())
            ))
        })??;
    debug!(
        "Returning {} customers (page {} of {})",
        envelope.data.len(),
        envelope.page,
        envelope.total_pages()
    );

    let body = serde_json::to_string(&envelope)
        .map_err(|e| ApiError::Assembly(format!("{}: {}", ERR_ENVELOPE_SERIALIZATION, e)))?;

    Ok(HttpResponse::Ok()
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .content_type(ContentType::json())
        .body(body))
}

/// Answer CORS preflight requests for the customer listing.
pub async fn customers_preflight() -> HttpResponse {
    HttpResponse::NoContent()
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"))
        .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, "*"))
        .finish()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}
