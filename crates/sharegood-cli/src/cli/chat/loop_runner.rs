//! Main chat loop.
//!
//! Opens a widget session, prints the banner and greeting, then reads lines
//! until EOF or `/exit`. Each message is sent to the widget and the loop
//! follows the widget's events until the bot stops typing.

use console::style;
use tokio::sync::broadcast;
use tracing::{Instrument, debug, info, info_span, warn};

use sharegood_core::chat::ChatWidget;
use sharegood_observe::fields::SPAN_SESSION;
use sharegood_types::chat::{ChatMessage, Sender};
use sharegood_types::config::{AppConfig, WidgetSettings};
use sharegood_types::event::WidgetEvent;

use super::banner::{print_bot_message, print_welcome_banner};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::typing_spinner;

/// Run the interactive chat loop.
pub async fn run_chat_loop(config: &AppConfig) -> anyhow::Result<()> {
    let settings = WidgetSettings {
        start_open: true,
        ..config.widget.clone()
    };
    let widget = ChatWidget::with_builtin_rules(settings);

    chat_session(&widget).instrument(info_span!(SPAN_SESSION)).await
}

async fn chat_session(widget: &ChatWidget) -> anyhow::Result<()> {
    let mut events = widget.subscribe();
    let opening = widget
        .messages()
        .await
        .first()
        .map(|m| m.text.clone())
        .unwrap_or_default();
    print_welcome_banner(&opening, widget.settings().response_delay_ms);

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Reset => {
                            widget.reset().await;
                            drain(&mut events);
                            println!();
                            if let Some(greeting) = widget.messages().await.first() {
                                print_bot_message(&greeting.text);
                            }
                        }
                        ChatCommand::History => print_history(&widget.messages().await),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                if let Err(e) = widget.send(&text).await {
                    warn!(error = %e, "message not sent");
                    println!("\n  {} {e}\n", style("!").red().bold());
                    continue;
                }
                println!();
                await_reply(&mut events).await;
            }
        }
    }

    chat_input.finish();
    widget.close().await;
    let message_count = widget.messages().await.len();
    info!(message_count, "chat session finished");
    Ok(())
}

/// Follow widget events until the bot has replied and stopped typing.
async fn await_reply(events: &mut broadcast::Receiver<WidgetEvent>) {
    let mut spinner = None;

    loop {
        match events.recv().await {
            Ok(WidgetEvent::TypingChanged { is_typing: true }) => {
                spinner = Some(typing_spinner());
            }
            Ok(WidgetEvent::MessageAppended { message }) if !message.is_from_user() => {
                if let Some(s) = spinner.take() {
                    s.finish_and_clear();
                }
                print_bot_message(&message.text);
            }
            Ok(WidgetEvent::TypingChanged { is_typing: false }) | Ok(WidgetEvent::Closed { .. }) | Ok(WidgetEvent::Reset) => break,
            Ok(_) => {}
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                debug!(skipped, "chat renderer lagged behind widget events");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    if let Some(s) = spinner {
        s.finish_and_clear();
    }
}

/// Discard events already queued (e.g. after a reset).
fn drain(events: &mut broadcast::Receiver<WidgetEvent>) {
    while events.try_recv().is_ok() {}
}

fn print_history(messages: &[ChatMessage]) {
    println!();
    for msg in messages {
        let label = match msg.sender {
            Sender::User => format!("{}", style("You").green()),
            Sender::Bot => format!("{}", style("ShareGood").cyan()),
        };
        let first_line = msg.text.lines().next().unwrap_or_default();
        let preview = if first_line.chars().count() > 100 {
            let truncated: String = first_line.chars().take(97).collect();
            format!("{truncated}...")
        } else {
            first_line.to_string()
        };
        println!(
            "  {} {} {}",
            style(msg.created_at.format("%H:%M:%S")).dim(),
            style(label).bold(),
            preview
        );
    }
    println!();
}
