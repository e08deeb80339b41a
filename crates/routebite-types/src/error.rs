use thiserror::Error;

/// Errors from route resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("start and end city must be non-empty")]
    EmptyCity,

    #[error("no direct road between '{start}' and '{end}'")]
    UnknownRoute { start: String, end: String },
}

/// Errors from entity extraction (NLU service).
#[derive(Debug, Error)]
pub enum IntentError {
    #[error("start city or end city not found in the message")]
    MissingEntities,

    #[error("NLU request failed: {0}")]
    Http(String),

    #[error("unexpected NLU response shape: {0}")]
    Malformed(String),
}

/// Errors from the chat transport (Telegram Bot API).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport request failed: {0}")]
    Http(String),

    #[error("Telegram API error {code}: {description}")]
    Api { code: i64, description: String },
}

/// Errors from loading the static route catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(String),
}

/// Errors from environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable '{0}'")]
    MissingVar(String),

    #[error("invalid value for environment variable '{0}': {1}")]
    InvalidVar(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_error_display() {
        let err = RouteError::UnknownRoute {
            start: "Trichy".to_string(),
            end: "Madurai".to_string(),
        };
        assert_eq!(err.to_string(), "no direct road between 'Trichy' and 'Madurai'");
    }

    #[test]
    fn test_intent_error_display() {
        let err = IntentError::MissingEntities;
        assert_eq!(
            err.to_string(),
            "start city or end city not found in the message"
        );
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Api {
            code: 403,
            description: "bot was blocked by the user".to_string(),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("blocked"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingVar("TELEGRAM_TOKEN".to_string());
        assert_eq!(
            err.to_string(),
            "missing required environment variable 'TELEGRAM_TOKEN'"
        );
    }
}
