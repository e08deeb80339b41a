//! Infrastructure implementations for Routebite: the Wit.ai NLU client, the
//! Telegram Bot API client, and environment-based configuration.
//!
//! Everything here is a thin, typed adapter over an external HTTP service.
//! Business logic lives in `routebite-core`; this crate only implements the
//! seams core defines.

pub mod config;
pub mod nlu;
pub mod telegram;
