//! HTTP error mapping to plain-text responses

use crate::contract::CatalogError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Plain-text error response; the body never carries store detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// The HTTP status code
    pub status: StatusCode,

    /// Short, non-sensitive message
    pub message: String,
}

impl Problem {
    /// Create a new error response
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        (self.status, format!("{}\n", self.message)).into_response()
    }
}

/// Map domain errors to HTTP responses
pub fn map_domain_error(error: CatalogError) -> Problem {
    match error {
        CatalogError::NotFound { resource, id } => {
            tracing::debug!(resource, id = %id, "Lookup matched no row");
            Problem::new(StatusCode::NOT_FOUND, "404 page not found")
        }

        CatalogError::Migration { .. } | CatalogError::Seed { .. } => {
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }

        CatalogError::Store => {
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}
