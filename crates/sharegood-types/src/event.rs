//! Event types for the chat widget event bus.
//!
//! `WidgetEvent` is broadcast on every widget state change. All variants are
//! Clone + Send + Sync for use with tokio broadcast channels.

use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;

/// Events emitted by a chat widget session.
///
/// Front ends subscribe to these to redraw the message list, show or hide
/// the typing indicator, and track visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetEvent {
    /// The widget became visible.
    Opened,

    /// The widget was hidden. Any pending reply was dropped.
    Closed { dropped_reply: bool },

    /// A message was appended to the session.
    MessageAppended { message: ChatMessage },

    /// The bot started or stopped "typing".
    TypingChanged { is_typing: bool },

    /// The session was cleared back to the greeting.
    Reset,
}
