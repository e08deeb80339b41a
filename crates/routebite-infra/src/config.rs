//! Environment-based runtime configuration.
//!
//! Two secrets are required: the Telegram bot token and the Wit.ai server
//! access token. Both are wrapped in [`secrecy::SecretString`] so they never
//! appear in Debug output or logs. The HTTP bind address is optional with
//! local defaults. There is no other externally configurable behavior.

use secrecy::SecretString;

use routebite_types::error::ConfigError;

/// Default bind host for the lookup endpoint.
const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port for the lookup endpoint.
const DEFAULT_PORT: u16 = 3000;

/// Runtime settings resolved from the process environment.
pub struct Settings {
    /// Telegram bot token (`TELEGRAM_TOKEN`).
    pub telegram_token: SecretString,
    /// Wit.ai server access token (`WIT_TOKEN`).
    pub wit_token: SecretString,
    /// HTTP bind host (`RBITE_HOST`, default 127.0.0.1).
    pub host: String,
    /// HTTP bind port (`RBITE_PORT`, default 3000).
    pub port: u16,
}

impl Settings {
    /// Resolve settings from environment variables.
    ///
    /// Missing required variables fail with [`ConfigError::MissingVar`];
    /// a non-numeric port fails with [`ConfigError::InvalidVar`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let telegram_token = require_var("TELEGRAM_TOKEN")?;
        let wit_token = require_var("WIT_TOKEN")?;

        let host = optional_var("RBITE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match optional_var("RBITE_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidVar("RBITE_PORT".to_string(), e.to_string()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            telegram_token: SecretString::from(telegram_token),
            wit_token: SecretString::from(wit_token),
            host,
            port,
        })
    }
}

/// Read a required environment variable.
fn require_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingVar(name.to_string()))
}

/// Read an optional environment variable.
///
/// A variable with invalid Unicode is treated as not present rather than an
/// error, since tokens must be valid strings anyway.
fn optional_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => Some(val),
        Ok(_) => None,
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_var_missing_is_none() {
        assert!(optional_var("RBITE_NONEXISTENT_VAR_XYZ").is_none());
    }

    #[test]
    fn optional_var_reads_existing() {
        // SAFETY: This test runs in its own process section and cleans up after.
        unsafe { std::env::set_var("RBITE_TEST_VAR_1", "value-123") };
        assert_eq!(optional_var("RBITE_TEST_VAR_1"), Some("value-123".to_string()));
        // SAFETY: The var was just set above.
        unsafe { std::env::remove_var("RBITE_TEST_VAR_1") };
    }

    #[test]
    fn require_var_missing_is_an_error() {
        let err = require_var("RBITE_NONEXISTENT_VAR_XYZ").unwrap_err();
        assert!(err.to_string().contains("RBITE_NONEXISTENT_VAR_XYZ"));
    }
}
