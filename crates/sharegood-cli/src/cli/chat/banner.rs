//! Welcome banner printed when a chat session starts.

use console::style;

/// Print the banner followed by the session's opening bot message.
pub fn print_welcome_banner(greeting: &str, response_delay_ms: u64) {
    println!();
    println!("  💚 {}", style("ShareGood Assistant").cyan().bold());
    println!(
        "  {}",
        style("Donations, pickups, NGO partners and your impact").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Reply delay:").bold(),
        style(format!("{response_delay_ms} ms")).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
    print_bot_message(greeting);
}

/// Print one bot message with the assistant label, indenting continuation lines.
pub fn print_bot_message(text: &str) {
    println!(
        "  {} {}",
        style("ShareGood >").cyan().bold(),
        text.replace('\n', "\n    ")
    );
    println!();
}
