//! The internal lookup endpoint: `POST /handle-message`.
//!
//! Accepts a pre-extracted entity map (the same shape the NLU service
//! produces), validates that both city slots are present, and delegates to
//! the resolver. Used by external integrations; the Telegram dispatcher
//! calls the resolver in-process and never goes through here.

use std::collections::HashMap;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use routebite_types::catalog::RouteStop;
use routebite_types::intent::{END_CITY_KEY, START_CITY_KEY};

use crate::http::error::LookupError;
use crate::state::AppState;

/// Request body: role-qualified entity key -> candidate values, best first.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub entities: HashMap<String, Vec<EntityValue>>,
}

/// One entity candidate; only the resolved value is consumed.
#[derive(Debug, Deserialize)]
pub struct EntityValue {
    #[serde(default)]
    pub value: Option<String>,
}

/// Success body: the restaurants on the resolved route.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub restaurants: Vec<RouteStop>,
}

impl LookupRequest {
    /// The first candidate value under `key`, if present.
    fn first_value(&self, key: &str) -> Option<&str> {
        self.entities.get(key)?.first()?.value.as_deref()
    }
}

/// POST /handle-message - resolve a city pair from an entity map.
///
/// The malformed-body rejection is handled here rather than left to axum so
/// that it collapses into the same 500 as every other failure, per the
/// endpoint contract.
pub async fn handle_message(
    State(state): State<AppState>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Json<LookupResponse>, LookupError> {
    let Json(request) = payload.map_err(|e| LookupError::BadRequest(e.to_string()))?;

    let start = request
        .first_value(START_CITY_KEY)
        .ok_or(LookupError::MissingEntities)?
        .to_string();
    let end = request
        .first_value(END_CITY_KEY)
        .ok_or(LookupError::MissingEntities)?
        .to_string();

    let restaurants = state.resolver.resolve(&start, &end)?;

    Ok(Json(LookupResponse { restaurants }))
}
