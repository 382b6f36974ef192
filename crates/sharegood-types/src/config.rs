//! Configuration types for the ShareGood assistant.
//!
//! `AppConfig` represents the top-level `config.toml` that controls the chat
//! widget's behaviour and logging. Every field has a default, so an empty
//! file (or no file at all) yields a working configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Bot message every widget session starts with.
pub const DEFAULT_GREETING: &str =
    "Hi there! 👋 I'm the ShareGood assistant. How can I help you today?";

/// Simulated reply latency, in milliseconds.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 800;

/// Top-level configuration.
///
/// Loaded from `~/.sharegood/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub widget: WidgetSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Chat widget behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// How long the bot "types" before its reply is appended.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// First bot message of every session (and after a reset).
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Whether a new widget starts open.
    #[serde(default)]
    pub start_open: bool,
}

fn default_response_delay_ms() -> u64 {
    DEFAULT_RESPONSE_DELAY_MS
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

impl WidgetSettings {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            greeting: default_greeting(),
            start_open: false,
        }
    }
}

/// Logging options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Bridge tracing spans to the OpenTelemetry stdout exporter.
    #[serde(default)]
    pub otel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.widget.response_delay_ms, 800);
        assert_eq!(config.widget.greeting, DEFAULT_GREETING);
        assert!(!config.widget.start_open);
        assert!(!config.logging.otel);
    }

    #[test]
    fn test_app_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.widget.response_delay(), Duration::from_millis(800));
        assert_eq!(config.widget.greeting, DEFAULT_GREETING);
    }

    #[test]
    fn test_app_config_deserialize_with_values() {
        let toml_str = r#"
[widget]
response_delay_ms = 250
greeting = "Welcome to ShareGood!"
start_open = true

[logging]
otel = true
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.widget.response_delay_ms, 250);
        assert_eq!(config.widget.greeting, "Welcome to ShareGood!");
        assert!(config.widget.start_open);
        assert!(config.logging.otel);
    }

    #[test]
    fn test_partial_widget_table_keeps_other_defaults() {
        let config: AppConfig = toml::from_str("[widget]\nresponse_delay_ms = 0\n").unwrap();
        assert_eq!(config.widget.response_delay_ms, 0);
        assert_eq!(config.widget.greeting, DEFAULT_GREETING);
    }
}
