//! Shared domain types for Routebite.
//!
//! This crate contains the core domain types used across the Routebite
//! workspace: road connections, restaurants, recognized entities, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod catalog;
pub mod error;
pub mod intent;
