//! Lookup endpoint error mapping.
//!
//! The endpoint's contract collapses every failure into a single
//! `500 {"error": "Internal server error"}` response: the distinction
//! between a malformed request, missing entity keys, and an unknown route
//! is kept in the logs but not surfaced to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::warn;

use routebite_types::error::RouteError;

/// Failures inside the lookup endpoint.
#[derive(Debug)]
pub enum LookupError {
    /// Request body could not be parsed as JSON.
    BadRequest(String),
    /// One or both entity keys were absent from the request.
    MissingEntities,
    /// The resolver rejected the city pair.
    Route(RouteError),
}

impl From<RouteError> for LookupError {
    fn from(e: RouteError) -> Self {
        LookupError::Route(e)
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        match &self {
            LookupError::BadRequest(msg) => {
                warn!(error = %msg, "lookup request body rejected");
            }
            LookupError::MissingEntities => {
                warn!("lookup request missing start or end city entity");
            }
            LookupError::Route(e) => {
                warn!(error = %e, "lookup resolution failed");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal server error" })),
        )
            .into_response()
    }
}
