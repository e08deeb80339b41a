//! Message dispatcher: normalizes inbound chat events into a city pair,
//! resolves the route, and formats the reply.
//!
//! Every internal failure (NLU error, missing slot, unknown route) collapses
//! into one generic user-facing fallback reply. The distinction between the
//! failure kinds is kept in the logs, never surfaced to the end user.
//!
//! The resolver is called in-process. The HTTP lookup endpoint in
//! `routebite-api` exposes the same resolver for external callers but is not
//! on this path.

use tracing::{debug, warn};

use routebite_types::catalog::RouteStop;

use crate::intent::IntentExtractor;
use crate::resolver::RouteResolver;

/// The single user-facing reply for any internal failure.
pub const FALLBACK_MESSAGE: &str = "Please provide a valid route.";

/// Callback payload requesting the route menu again.
pub const CHOOSE_ROUTE_PAYLOAD: &str = "choose_route";

/// Payload separator between the two cities of a route button.
const PAIR_SEPARATOR: &str = " to ";

/// An inbound chat event, already stripped of transport detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// A literal command token such as `/start` or `/routes`.
    Command(String),
    /// An inline-button callback payload.
    Callback(String),
    /// Free-form text to run through the NLU service.
    Text(String),
}

/// One inline button: visible label plus the callback payload it sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub payload: String,
}

/// A transport-agnostic outbound reply: text plus optional button rows.
///
/// The Telegram layer maps `buttons` onto an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub buttons: Vec<Vec<Button>>,
}

impl Reply {
    /// A plain text reply with no keyboard.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            buttons: Vec::new(),
        }
    }

    /// The generic fallback reply.
    pub fn fallback() -> Self {
        Self::plain(FALLBACK_MESSAGE)
    }
}

/// Split a button payload of the form `"{start} to {end}"`.
///
/// Splits on the first separator occurrence, so a city name containing
/// `" to "` would be ambiguous; none in the catalog does.
pub fn parse_pair(payload: &str) -> Option<(&str, &str)> {
    let (start, end) = payload.split_once(PAIR_SEPARATOR)?;
    if start.is_empty() || end.is_empty() {
        return None;
    }
    Some((start, end))
}

/// Encode a city pair as a button payload.
pub fn pair_payload(start: &str, end: &str) -> String {
    format!("{start}{PAIR_SEPARATOR}{end}")
}

/// Handles one inbound chat event end-to-end: entity extraction, route
/// resolution, and reply formatting.
///
/// Generic over [`IntentExtractor`] so tests can substitute canned
/// extractors for the Wit.ai client. Stateless across events: the chat
/// platform's conversation id is the only per-user state, and it never
/// reaches this type.
pub struct MessageDispatcher<I: IntentExtractor> {
    intent: I,
    resolver: RouteResolver,
}

impl<I: IntentExtractor> MessageDispatcher<I> {
    /// Create a dispatcher over an extractor and a resolver.
    pub fn new(intent: I, resolver: RouteResolver) -> Self {
        Self { intent, resolver }
    }

    /// Handle one inbound event and produce the reply to send.
    ///
    /// Infallible at this boundary: every error path becomes the fallback
    /// reply, logged with its real cause.
    pub async fn handle(&self, inbound: Inbound) -> Reply {
        match inbound {
            Inbound::Command(token) => {
                debug!(command = %token, "command received, showing route menu");
                self.route_menu()
            }
            Inbound::Callback(payload) if payload == CHOOSE_ROUTE_PAYLOAD => self.route_menu(),
            Inbound::Callback(payload) => match parse_pair(&payload) {
                Some((start, end)) => self.resolve_reply(start, end),
                None => {
                    warn!(payload = %payload, "unparseable callback payload");
                    Reply::fallback()
                }
            },
            Inbound::Text(text) => self.handle_text(&text).await,
        }
    }

    /// Free-text path: NLU extraction first, then resolution.
    ///
    /// A message missing either city slot never reaches the resolver.
    async fn handle_text(&self, text: &str) -> Reply {
        let entities = match self.intent.extract(text).await {
            Ok(entities) => entities,
            Err(err) => {
                warn!(error = %err, "entity extraction failed");
                return Reply::fallback();
            }
        };

        match entities.city_pair() {
            Some((start, end)) => {
                let (start, end) = (start.to_string(), end.to_string());
                self.resolve_reply(&start, &end)
            }
            None => {
                warn!(
                    has_start = entities.start_city.is_some(),
                    has_end = entities.end_city.is_some(),
                    "message did not yield both cities"
                );
                Reply::fallback()
            }
        }
    }

    /// Resolve a city pair and format the reply, with the follow-up prompt.
    fn resolve_reply(&self, start: &str, end: &str) -> Reply {
        match self.resolver.resolve(start, end) {
            Ok(stops) if stops.is_empty() => Reply {
                text: format!("No restaurants found between {start} and {end}."),
                buttons: vec![follow_up_row()],
            },
            Ok(stops) => Reply {
                text: format_stops(start, end, &stops),
                buttons: vec![follow_up_row()],
            },
            Err(err) => {
                warn!(start = %start, end = %end, error = %err, "route resolution failed");
                Reply::fallback()
            }
        }
    }

    /// The fixed menu of route choices, one button per known connection.
    fn route_menu(&self) -> Reply {
        let buttons = self
            .resolver
            .catalog()
            .connections()
            .iter()
            .map(|conn| {
                vec![Button {
                    label: pair_payload(&conn.from, &conn.to),
                    payload: pair_payload(&conn.from, &conn.to),
                }]
            })
            .collect();

        Reply {
            text: "Pick a route:".to_string(),
            buttons,
        }
    }
}

/// Format the successful reply line.
fn format_stops(start: &str, end: &str, stops: &[RouteStop]) -> String {
    let joined = stops
        .iter()
        .map(|s| format!("{} ({})", s.name, s.location))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Restaurants between {start} and {end}: {joined}")
}

/// The "choose another route" follow-up button row.
fn follow_up_row() -> Vec<Button> {
    vec![Button {
        label: "Choose another route".to_string(),
        payload: CHOOSE_ROUTE_PAYLOAD.to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use routebite_types::error::IntentError;
    use routebite_types::intent::RecognizedEntities;

    use crate::catalog::RouteCatalog;

    use super::*;

    /// Extractor returning a fixed result, regardless of input.
    struct FixedExtractor(RecognizedEntities);

    impl IntentExtractor for FixedExtractor {
        async fn extract(&self, _text: &str) -> Result<RecognizedEntities, IntentError> {
            Ok(self.0.clone())
        }
    }

    /// Extractor that always fails at the transport level.
    struct FailingExtractor;

    impl IntentExtractor for FailingExtractor {
        async fn extract(&self, _text: &str) -> Result<RecognizedEntities, IntentError> {
            Err(IntentError::Http("connection refused".to_string()))
        }
    }

    fn resolver() -> RouteResolver {
        RouteResolver::new(Arc::new(RouteCatalog::builtin()))
    }

    fn entities(start: Option<&str>, end: Option<&str>) -> RecognizedEntities {
        RecognizedEntities {
            start_city: start.map(str::to_string),
            end_city: end.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn free_text_with_both_cities_formats_the_route() {
        let dispatcher = MessageDispatcher::new(
            FixedExtractor(entities(Some("Chennai"), Some("Madurai"))),
            resolver(),
        );
        let reply = dispatcher
            .handle(Inbound::Text("food from chennai to madurai".to_string()))
            .await;
        assert_eq!(
            reply.text,
            "Restaurants between Chennai and Madurai: Restaurant A (Chennai), \
             Restaurant B (Madurai), Restaurant E (Madurai)"
        );
        assert_eq!(reply.buttons, vec![follow_up_row()]);
    }

    #[tokio::test]
    async fn missing_end_city_yields_fallback() {
        let dispatcher =
            MessageDispatcher::new(FixedExtractor(entities(Some("Chennai"), None)), resolver());
        let reply = dispatcher
            .handle(Inbound::Text("restaurants near chennai".to_string()))
            .await;
        assert_eq!(reply, Reply::fallback());
    }

    #[tokio::test]
    async fn extractor_failure_yields_fallback() {
        let dispatcher = MessageDispatcher::new(FailingExtractor, resolver());
        let reply = dispatcher.handle(Inbound::Text("anything".to_string())).await;
        assert_eq!(reply, Reply::fallback());
    }

    #[tokio::test]
    async fn unknown_route_yields_fallback() {
        let dispatcher = MessageDispatcher::new(
            FixedExtractor(entities(Some("Chennai"), Some("Mumbai"))),
            resolver(),
        );
        let reply = dispatcher.handle(Inbound::Text("chennai to mumbai".to_string())).await;
        assert_eq!(reply, Reply::fallback());
    }

    #[tokio::test]
    async fn callback_pair_matches_free_text_reply() {
        let dispatcher = MessageDispatcher::new(
            FixedExtractor(entities(Some("Chennai"), Some("Madurai"))),
            resolver(),
        );
        let from_callback = dispatcher
            .handle(Inbound::Callback("Chennai to Madurai".to_string()))
            .await;
        let from_text = dispatcher
            .handle(Inbound::Text("take me from chennai to madurai".to_string()))
            .await;
        assert_eq!(from_callback.text, from_text.text);
    }

    #[tokio::test]
    async fn command_shows_route_menu_without_touching_nlu() {
        // FailingExtractor proves the command path short-circuits extraction.
        let dispatcher = MessageDispatcher::new(FailingExtractor, resolver());
        let reply = dispatcher.handle(Inbound::Command("/routes".to_string())).await;
        assert_eq!(reply.text, "Pick a route:");
        assert_eq!(reply.buttons.len(), 11);
        assert_eq!(reply.buttons[0][0].payload, "Chennai to Madurai");
    }

    #[tokio::test]
    async fn choose_route_sentinel_reshows_menu() {
        let dispatcher = MessageDispatcher::new(FailingExtractor, resolver());
        let reply = dispatcher
            .handle(Inbound::Callback(CHOOSE_ROUTE_PAYLOAD.to_string()))
            .await;
        assert_eq!(reply.text, "Pick a route:");
        assert!(!reply.buttons.is_empty());
    }

    #[tokio::test]
    async fn garbage_callback_payload_yields_fallback() {
        let dispatcher = MessageDispatcher::new(FailingExtractor, resolver());
        let reply = dispatcher.handle(Inbound::Callback("Chennai".to_string())).await;
        assert_eq!(reply, Reply::fallback());
    }

    #[test]
    fn parse_pair_splits_on_first_separator() {
        assert_eq!(parse_pair("Chennai to Madurai"), Some(("Chennai", "Madurai")));
        assert_eq!(parse_pair("Chennai"), None);
        assert_eq!(parse_pair(" to Madurai"), None);
    }
}
