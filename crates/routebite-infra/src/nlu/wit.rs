//! WitClient -- concrete [`IntentExtractor`] implementation for Wit.ai.
//!
//! Sends the raw message text to the Wit.ai `/message` endpoint and maps the
//! role-qualified entity arrays back into [`RecognizedEntities`]. A slot the
//! service did not recognize is simply absent from the response map.
//!
//! The access token is wrapped in [`secrecy::SecretString`] and is only
//! exposed when building the Authorization header.

use std::collections::HashMap;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use routebite_core::intent::IntentExtractor;
use routebite_types::error::IntentError;
use routebite_types::intent::{END_CITY_KEY, RecognizedEntities, START_CITY_KEY};

/// Wit.ai NLU client.
pub struct WitClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

impl WitClient {
    /// Wit.ai API version date passed as the `v` query parameter.
    const API_VERSION: &'static str = "20240304";

    /// Create a new Wit.ai client.
    pub fn new(token: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: "https://api.wit.ai".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

// WitClient intentionally does NOT derive Debug: the SecretString field
// protects the token, but omitting Debug entirely avoids the question.

impl IntentExtractor for WitClient {
    async fn extract(&self, text: &str) -> Result<RecognizedEntities, IntentError> {
        let response = self
            .client
            .get(format!("{}/message", self.base_url))
            .query(&[("v", Self::API_VERSION), ("q", text)])
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(|e| IntentError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntentError::Http(format!("Wit.ai returned status {status}")));
        }

        let body: WitMessageResponse = response
            .json()
            .await
            .map_err(|e| IntentError::Malformed(e.to_string()))?;

        Ok(body.into_entities())
    }
}

/// Subset of the Wit.ai `/message` response the bot consumes.
#[derive(Debug, Deserialize)]
struct WitMessageResponse {
    /// Role-qualified entity key -> candidate values, best first.
    #[serde(default)]
    entities: HashMap<String, Vec<WitEntity>>,
}

/// One recognized entity candidate. Wit.ai sends more fields (confidence,
/// spans); only the resolved value matters here.
#[derive(Debug, Deserialize)]
struct WitEntity {
    #[serde(default)]
    value: Option<String>,
}

impl WitMessageResponse {
    /// The first candidate value under `key`, if the slot was recognized.
    fn first_value(&self, key: &str) -> Option<String> {
        self.entities
            .get(key)?
            .first()?
            .value
            .clone()
    }

    /// Project the raw entity map onto the two slots the dispatcher needs.
    fn into_entities(self) -> RecognizedEntities {
        RecognizedEntities {
            start_city: self.first_value(START_CITY_KEY),
            end_city: self.first_value(END_CITY_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_response_yields_both_slots() {
        let body = r#"{
            "text": "restaurants from Chennai to Madurai",
            "intents": [{"name": "find_restaurants", "confidence": 0.99}],
            "entities": {
                "start_city:start_city": [{"value": "Chennai", "confidence": 0.97}],
                "end_city:end_city": [{"value": "Madurai", "confidence": 0.95}]
            }
        }"#;
        let response: WitMessageResponse = serde_json::from_str(body).unwrap();
        let entities = response.into_entities();
        assert_eq!(entities.start_city.as_deref(), Some("Chennai"));
        assert_eq!(entities.end_city.as_deref(), Some("Madurai"));
    }

    #[test]
    fn missing_slot_is_none() {
        let body = r#"{
            "entities": {
                "start_city:start_city": [{"value": "Chennai"}]
            }
        }"#;
        let response: WitMessageResponse = serde_json::from_str(body).unwrap();
        let entities = response.into_entities();
        assert_eq!(entities.start_city.as_deref(), Some("Chennai"));
        assert!(entities.end_city.is_none());
    }

    #[test]
    fn empty_entity_map_yields_no_slots() {
        let response: WitMessageResponse = serde_json::from_str(r#"{"entities": {}}"#).unwrap();
        let entities = response.into_entities();
        assert!(entities.city_pair().is_none());
    }

    #[test]
    fn entity_without_value_is_treated_as_unrecognized() {
        let body = r#"{
            "entities": {
                "start_city:start_city": [{"confidence": 0.4}]
            }
        }"#;
        let response: WitMessageResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_entities().start_city.is_none());
    }
}
