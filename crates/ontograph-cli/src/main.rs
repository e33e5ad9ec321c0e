//! Ontograph CLI entry point.
//!
//! Binary name: `ontograph`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "ontograph", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.config_dir.clone()).await;

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,ontograph_core=debug,ontograph_infra=debug",
        _ => "trace",
    };
    ontograph_observe::tracing_setup::init_tracing(filter, state.config.log_format)
        .map_err(|e| anyhow::anyhow!(e))?;

    let graph = cli.graph.as_deref();

    match cli.command {
        Commands::Validate => {
            let valid = cli::validate::validate(&state, graph, cli.json, cli.quiet).await?;
            if !valid {
                std::process::exit(1);
            }
        }

        Commands::Status { learned } => {
            cli::status::status(&state, graph, &learned, cli.json).await?;
        }

        Commands::Node { id, learned } => {
            cli::node::show_node(&state, graph, &id, &learned, cli.json).await?;
        }

        Commands::Path { id, learned } => {
            cli::path::show_path(&state, graph, &id, &learned, cli.json).await?;
        }

        Commands::Learn { id, learned } => {
            cli::learn::learn_node(&state, graph, &id, learned.as_deref(), cli.json).await?;
        }

        Commands::Unlearn { id, learned } => {
            cli::learn::unlearn_node(&state, &id, learned.as_deref(), cli.json).await?;
        }

        Commands::Completions { .. } => {}
    }

    Ok(())
}
