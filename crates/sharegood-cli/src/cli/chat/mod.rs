//! Interactive CLI chat with the assistant widget.
//!
//! Entry point: `loop_runner::run_chat_loop`. The loop drives a
//! `ChatWidget` and renders its events: a spinner while the bot is typing,
//! then the reply.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the bot is "typing".
pub fn typing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("typing...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
