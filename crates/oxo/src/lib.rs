//! oxo - the text shell around the tic-tac-toe solver.
//!
//! # Architecture
//!
//! - **Commands**: `play`, `selfplay` and `analyze`
//! - **Contestants**: human (line input) and minimax players behind one trait
//! - **Match**: drives two contestants to the end of a game
//! - **Config**: TOML settings with CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod contestants;
mod game_match;

pub use cli::{Cli, Command};
pub use commands::{Analysis, analyze, play, selfplay};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, OxoConfig};
pub use contestants::{Choice, Contestant, HELP_TEXT, HumanContestant, MinimaxContestant};
pub use game_match::{Match, MatchOutcome};
