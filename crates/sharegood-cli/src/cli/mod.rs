//! CLI command definitions for the `sgood` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;
pub mod rules;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Talk to the ShareGood donation assistant.
#[derive(Parser)]
#[command(name = "sgood", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "SHAREGOOD_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open an interactive chat session with the assistant.
    Chat,

    /// Ask a single question and print the reply.
    Ask {
        /// The message to send.
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Also show which rule produced the reply.
        #[arg(long)]
        explain: bool,
    },

    /// List the reply rules in priority order.
    Rules,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
