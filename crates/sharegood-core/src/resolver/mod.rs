//! Rule-based chat reply resolution.
//!
//! A [`RuleSet`] is an ordered list of [`PatternRule`]s. Resolution lowercases
//! the message, scans the rules top to bottom and returns the response of the
//! first rule whose predicate matches, or the fallback response when none do.
//! Rule order is part of the contract: rules overlap, and the earlier one wins.

pub mod rule;
pub mod table;

use sharegood_types::chat::ChatMessage;

pub use rule::{PatternRule, Predicate, PredicateSpec, Resolution, RuleSet, RuleSpec};

/// Anything that can turn a user message into a bot reply.
///
/// Implementations must be total: every input, including the empty string,
/// maps to some reply.
pub trait ResponseResolver: Send + Sync {
    /// Pick the reply for `message`.
    ///
    /// `history` is the session's message list up to and including the
    /// message being answered.
    fn resolve(&self, message: &str, history: &[ChatMessage]) -> String;
}

impl ResponseResolver for RuleSet {
    // The built-in rules are stateless; history is not consulted.
    fn resolve(&self, message: &str, _history: &[ChatMessage]) -> String {
        self.classify(message).response.to_string()
    }
}

/// Resolve `message` against the built-in ShareGood rule table.
pub fn resolve(message: &str, history: &[ChatMessage]) -> String {
    RuleSet::builtin().resolve(message, history)
}
