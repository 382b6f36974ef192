//! Span names shared by the chat front ends, so log queries stay stable.

/// Span wrapping an interactive chat session.
pub const SPAN_SESSION: &str = "chat.session";

/// Span wrapping a one-shot `ask`.
pub const SPAN_ASK: &str = "chat.ask";

/// Service name reported to OpenTelemetry.
pub const SERVICE_NAME: &str = "sharegood-assistant";
