//! Telegram Bot API client and wire types.

mod client;
mod types;

pub use client::TelegramClient;
pub use types::{CallbackQuery, Chat, InlineKeyboardMarkup, Message, Update};
