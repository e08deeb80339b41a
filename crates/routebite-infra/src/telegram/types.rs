//! Serde types for the subset of the Telegram Bot API the bot consumes.
//!
//! Inbound: updates carrying either a plain message or an inline-button
//! callback query. Outbound: sendMessage payloads with an optional inline
//! keyboard. Unknown fields are ignored on deserialization, so new API
//! fields do not break the poller.

use serde::{Deserialize, Serialize};

use routebite_core::dispatch::Button;

/// One long-poll update from `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

/// An inbound chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

/// The conversation the message belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// An inline-button press.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    #[serde(default)]
    pub data: Option<String>,
    /// The message the pressed keyboard was attached to.
    #[serde(default)]
    pub message: Option<Message>,
}

/// Envelope every Bot API response is wrapped in.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Outbound `sendMessage` body.
#[derive(Debug, Serialize)]
pub(crate) struct SendMessageBody<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Outbound `getUpdates` body.
#[derive(Debug, Serialize)]
pub(crate) struct GetUpdatesBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: &'static [&'static str],
}

/// Outbound `answerCallbackQuery` body.
#[derive(Debug, Serialize)]
pub(crate) struct AnswerCallbackBody<'a> {
    pub callback_query_id: &'a str,
}

/// Inline keyboard attachment for outbound messages.
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// One inline keyboard button.
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineKeyboardMarkup {
    /// Map dispatcher button rows onto the Telegram keyboard shape.
    pub fn from_rows(rows: &[Vec<Button>]) -> Self {
        Self {
            inline_keyboard: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|b| InlineKeyboardButton {
                            text: b.label.clone(),
                            callback_data: b.payload.clone(),
                        })
                        .collect()
                })
                .collect(),
        }
    }
}
