//! Command-line interface for oxo.

use clap::{Parser, Subcommand};
use oxo_tictactoe::Player;
use std::path::PathBuf;

/// oxo - tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Play tic-tac-toe against a bot that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the bot
    Play {
        /// Your marker (X moves first). Prompts if neither this nor the config sets it.
        #[arg(short, long)]
        marker: Option<Player>,
    },

    /// Let the bot play itself
    Selfplay {
        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Slot (1-9) for X's forced opening move
        #[arg(long)]
        opening: Option<usize>,
    },

    /// Print the best move for a position
    Analyze {
        /// Board as nine cells, e.g. "XX_/OO_/___"
        board: String,

        /// Player to move
        #[arg(short, long)]
        player: Player,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
