//! Business logic for Routebite: the static route catalog, the pure route
//! resolver, the intent-extractor seam, and the message dispatcher.
//!
//! This crate never talks to the network. The NLU service and the chat
//! transport are reached through traits implemented in `routebite-infra`,
//! which keeps everything here synchronous to construct and trivial to test.

pub mod catalog;
pub mod dispatch;
pub mod intent;
pub mod resolver;
