use thiserror::Error;

/// Errors from chat widget operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("chat widget is closed")]
    Closed,

    #[error("message is empty")]
    EmptyMessage,

    #[error("no async runtime available to schedule the reply")]
    NoRuntime,
}

/// Errors raised while building a rule table.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("rule '{rule}' has an invalid pattern: {reason}")]
    InvalidPattern { rule: String, reason: String },

    #[error("rule '{0}' has no keywords")]
    EmptyKeywords(String),
}

/// Errors from loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
