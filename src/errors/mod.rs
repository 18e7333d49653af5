use actix_web::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::constants::ERR_INTERNAL_SERVER_ERROR;
use crate::models::ErrorResponse;
use crate::repositories::RepositoryError;

/// Faults surfaced at the HTTP boundary.
///
/// Every variant renders the same generic 500 response; the variants only keep
/// the fault category distinguishable in logs.
#[derive(Debug)]
pub enum ApiError {
    /// The dataset provider failed to answer.
    Provider(RepositoryError),
    /// Anything else that went wrong while building the response.
    Assembly(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Provider(err) => write!(f, "Provider fault: {}", err),
            ApiError::Assembly(message) => write!(f, "Assembly fault: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!("Error processing request: {}", self);

        HttpResponse::build(self.status_code())
            .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
            .json(ErrorResponse {
                message: ERR_INTERNAL_SERVER_ERROR.to_string(),
            })
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::Provider(err)
    }
}
