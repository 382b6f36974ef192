//! `sgood rules`: print the reply rule table in priority order.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use serde::Serialize;

use sharegood_core::resolver::{PatternRule, RuleSet};

#[derive(Debug, Serialize)]
struct RuleListing {
    rules: Vec<RuleRow>,
    fallback: &'static str,
}

#[derive(Debug, Serialize)]
struct RuleRow {
    priority: usize,
    name: &'static str,
    kind: &'static str,
    trigger: String,
}

fn listing(rules: &RuleSet) -> RuleListing {
    RuleListing {
        rules: rows(rules.rules()),
        fallback: rules.fallback(),
    }
}

fn rows(rules: &[PatternRule]) -> Vec<RuleRow> {
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleRow {
            priority: i + 1,
            name: rule.name,
            kind: rule.predicate.kind(),
            trigger: rule.predicate.describe(),
        })
        .collect()
}

pub fn list_rules(json: bool) -> anyhow::Result<()> {
    let listing = listing(RuleSet::builtin());

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Rule", "Kind", "Trigger"]);
    for row in &listing.rules {
        table.add_row(vec![
            row.priority.to_string(),
            row.name.to_string(),
            row.kind.to_string(),
            row.trigger.clone(),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {}",
        style("First matching rule wins; unmatched messages get the fallback reply:").dim()
    );
    for line in listing.fallback.lines() {
        println!("    {}", style(line).dim());
    }
    println!();
    Ok(())
}
