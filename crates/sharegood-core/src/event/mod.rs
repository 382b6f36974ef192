//! Event bus for chat widget observers.
//!
//! Provides an `EventBus` that distributes `WidgetEvent` messages to all
//! subscribers via a `tokio::sync::broadcast` channel.

pub mod bus;

pub use bus::EventBus;
