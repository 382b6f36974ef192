//! ShareGood assistant terminal client.
//!
//! Binary name: `sgood`
//!
//! Parses CLI arguments, loads configuration, sets up tracing, then
//! dispatches to the requested command.

mod cli;

use clap::Parser;
use clap_complete::generate;
use sharegood_infra::config::{config_or_default, read_config};
use sharegood_infra::paths::resolve_data_dir;
use sharegood_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or logging
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "sgood", &mut std::io::stdout());
        return Ok(());
    }

    // Config is read before the subscriber exists; problems are reported after.
    let data_dir = resolve_data_dir();
    let config_result = read_config(&data_dir).await;
    let otel = cli.otel
        || matches!(&config_result, Ok(Some(config)) if config.logging.otel);

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let config = config_or_default(config_result, &data_dir);

    let result = match cli.command {
        Commands::Chat => cli::chat::loop_runner::run_chat_loop(&config).await,
        Commands::Ask { message, explain } => {
            cli::ask::run_ask(&config, &message.join(" "), explain, cli.json).await
        }
        Commands::Rules => cli::rules::list_rules(cli.json),
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}
