//! TelegramClient -- minimal Bot API client over reqwest.
//!
//! Covers exactly what the poller needs: `getUpdates` long polling,
//! `sendMessage` with an optional inline keyboard, and
//! `answerCallbackQuery` to dismiss the client-side spinner after a button
//! press. No webhook mode, no media, no retries.
//!
//! The bot token is part of every request URL, so it is wrapped in
//! [`secrecy::SecretString`] and only exposed at URL construction time.
//! Request errors are reported without the URL to keep the token out of
//! logs.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use routebite_core::dispatch::Reply;
use routebite_types::error::TransportError;

use super::types::{
    AnswerCallbackBody, ApiEnvelope, GetUpdatesBody, InlineKeyboardMarkup, SendMessageBody, Update,
};

/// Long-poll wait passed to `getUpdates`, in seconds.
const POLL_TIMEOUT_SECS: u64 = 30;

/// Telegram Bot API client.
pub struct TelegramClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

impl TelegramClient {
    /// Create a new client for the given bot token.
    pub fn new(token: SecretString) -> Self {
        // Client timeout must exceed the long-poll wait or getUpdates would
        // time out locally before the server responds.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: "https://api.telegram.org".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Fetch pending updates, long-polling up to the configured wait.
    ///
    /// `offset` should be one past the last processed `update_id` so the
    /// server drops everything already handled.
    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TransportError> {
        let body = GetUpdatesBody {
            offset,
            timeout: POLL_TIMEOUT_SECS,
            allowed_updates: &["message", "callback_query"],
        };
        let updates: Vec<Update> = self.call("getUpdates", &body).await?;
        if !updates.is_empty() {
            debug!(count = updates.len(), "received updates");
        }
        Ok(updates)
    }

    /// Send a reply to a chat, attaching an inline keyboard when the
    /// dispatcher produced button rows.
    pub async fn send_reply(&self, chat_id: i64, reply: &Reply) -> Result<(), TransportError> {
        let reply_markup = if reply.buttons.is_empty() {
            None
        } else {
            Some(InlineKeyboardMarkup::from_rows(&reply.buttons))
        };
        let body = SendMessageBody {
            chat_id,
            text: &reply.text,
            reply_markup,
        };
        let _sent: serde_json::Value = self.call("sendMessage", &body).await?;
        Ok(())
    }

    /// Acknowledge a callback query so the client stops showing a spinner.
    pub async fn answer_callback_query(&self, query_id: &str) -> Result<(), TransportError> {
        let body = AnswerCallbackBody {
            callback_query_id: query_id,
        };
        let _ok: serde_json::Value = self.call("answerCallbackQuery", &body).await?;
        Ok(())
    }

    /// POST a Bot API method and unwrap the response envelope.
    async fn call<B: Serialize, T: DeserializeOwned + Default>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        let url = format!(
            "{}/bot{}/{}",
            self.base_url,
            self.token.expose_secret(),
            method
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Http(format!("{method}: {}", e.without_url())))?;

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| TransportError::Http(format!("{method}: {}", e.without_url())))?;

        if !envelope.ok {
            return Err(TransportError::Api {
                code: envelope.error_code.unwrap_or(0),
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }

        envelope.result.ok_or_else(|| {
            TransportError::Http(format!("{method}: ok response missing result"))
        })
    }
}
