//! Shared domain types for the ShareGood assistant.
//!
//! This crate contains the types passed between the resolver, the chat
//! widget and its front ends: chat messages, widget events, configuration
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod event;
