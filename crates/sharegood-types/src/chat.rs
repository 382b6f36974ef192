//! Chat message types for the assistant widget.
//!
//! A widget session holds an ordered list of `ChatMessage`s. Messages are
//! created when the user sends text and when the bot replies; they live in
//! memory only and disappear with the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single message in a widget session.
///
/// `id` is a UUID v7, so ids sort in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message authored by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    /// Create a message authored by the bot.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            sender,
            created_at: Utc::now(),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_display_and_parse() {
        for sender in [Sender::User, Sender::Bot] {
            let parsed: Sender = sender.to_string().parse().unwrap();
            assert_eq!(parsed, sender);
        }
        assert_eq!("BOT".parse::<Sender>().unwrap(), Sender::Bot);
        assert!("assistant".parse::<Sender>().is_err());
    }

    #[test]
    fn test_sender_serde() {
        let json = serde_json::to_string(&Sender::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
        let parsed: Sender = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Sender::User);
    }

    #[test]
    fn test_constructors_set_sender() {
        let msg = ChatMessage::user("hello");
        assert!(msg.is_from_user());
        assert_eq!(msg.text, "hello");

        let reply = ChatMessage::bot("hi!");
        assert_eq!(reply.sender, Sender::Bot);
        assert!(!reply.is_from_user());
    }

    #[test]
    fn test_ids_are_time_ordered() {
        let first = ChatMessage::user("one");
        let second = ChatMessage::bot("two");
        assert!(first.id < second.id);
    }

    #[test]
    fn test_chat_message_serialize() {
        let msg = ChatMessage::user("Can I donate bread?");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"user\""));
        assert!(json.contains("\"text\":\"Can I donate bread?\""));
    }
}
