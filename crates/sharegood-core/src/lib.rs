//! Chat logic for the ShareGood assistant.
//!
//! The resolver maps a free-text message to one canned reply using an
//! ordered rule table. The chat widget wraps it in a session with a message
//! list, a typing indicator and a cancellable delayed reply. Neither depends
//! on any IO crate; front ends observe the widget through the event bus.

pub mod chat;
pub mod event;
pub mod resolver;
