//! One-shot `sgood ask`: send a single message through a widget session and
//! print the reply.

use console::style;
use serde::Serialize;
use tracing::{Instrument, info_span};

use sharegood_core::chat::ChatWidget;
use sharegood_core::resolver::RuleSet;
use sharegood_observe::fields::SPAN_ASK;
use sharegood_types::config::{AppConfig, WidgetSettings};

use super::chat::typing_spinner;

#[derive(Debug, Serialize)]
struct AskOutput<'a> {
    message: &'a str,
    reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<&'static str>,
}

/// Send `message` and wait for the bot's reply.
async fn ask(widget: &ChatWidget, message: &str) -> anyhow::Result<String> {
    widget.send(message).await?;
    widget.wait_idle().await;

    widget
        .messages()
        .await
        .into_iter()
        .rev()
        .find(|m| !m.is_from_user())
        .map(|m| m.text)
        .ok_or_else(|| anyhow::anyhow!("no reply was produced"))
}

pub async fn run_ask(config: &AppConfig, message: &str, explain: bool, json: bool) -> anyhow::Result<()> {
    let settings = WidgetSettings {
        start_open: true,
        ..config.widget.clone()
    };
    let widget = ChatWidget::with_builtin_rules(settings);

    let spinner = (!json && console::user_attended()).then(typing_spinner);
    let reply = ask(&widget, message).instrument(info_span!(SPAN_ASK)).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let reply = reply?;

    let rule = explain
        .then(|| RuleSet::builtin().classify(message.trim()).rule)
        .flatten();

    if json {
        let output = AskOutput {
            message: message.trim(),
            reply,
            rule,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("  {}", reply.replace('\n', "\n  "));
    if explain {
        let label = rule.unwrap_or("fallback");
        println!();
        println!("  {} {}", style("rule:").dim(), style(label).cyan());
    }
    println!();
    Ok(())
}
