//! oxo - play tic-tac-toe against a bot that never loses.

use anyhow::Result;
use clap::Parser;
use oxo::{Cli, Command, OxoConfig};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = OxoConfig::load(cli.config.as_deref())?;
    info!(?config, "Starting oxo");

    match cli.command {
        Command::Play { marker } => {
            let config = config.with_marker(marker);
            oxo::play(io::stdin().lock(), io::stdout().lock(), &config)?;
        }
        Command::Selfplay { games, opening } => {
            oxo::selfplay(io::stdout().lock(), &config, games, opening)?;
        }
        Command::Analyze {
            board,
            player,
            json,
        } => {
            oxo::analyze(io::stdout().lock(), &board, player, json)?;
        }
    }

    Ok(())
}
