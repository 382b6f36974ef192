//! Chat widget session management.
//!
//! The widget is the only consumer of the resolver: it keeps the message
//! list for one session and answers each user message exactly once.

pub mod widget;

pub use widget::ChatWidget;
