//! Recognized entities extracted from free text.
//!
//! The NLU service maps a message like "restaurants from Chennai to Madurai"
//! to role-qualified entity keys. Absence of a key means that slot was not
//! recognized -- there is no empty-string sentinel.

use serde::{Deserialize, Serialize};

/// Wit.ai role-qualified entity key for the start city slot.
pub const START_CITY_KEY: &str = "start_city:start_city";

/// Wit.ai role-qualified entity key for the end city slot.
pub const END_CITY_KEY: &str = "end_city:end_city";

/// Start/end city slots recognized in a single inbound message.
///
/// Transient: one per inbound event, discarded after the reply is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedEntities {
    pub start_city: Option<String>,
    pub end_city: Option<String>,
}

impl RecognizedEntities {
    /// Both slots recognized: return the `(start, end)` pair.
    pub fn city_pair(&self) -> Option<(&str, &str)> {
        match (&self.start_city, &self.end_city) {
            (Some(start), Some(end)) => Some((start.as_str(), end.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_pair_requires_both_slots() {
        let entities = RecognizedEntities {
            start_city: Some("Chennai".to_string()),
            end_city: None,
        };
        assert!(entities.city_pair().is_none());

        let entities = RecognizedEntities {
            start_city: Some("Chennai".to_string()),
            end_city: Some("Madurai".to_string()),
        };
        assert_eq!(entities.city_pair(), Some(("Chennai", "Madurai")));
    }
}
