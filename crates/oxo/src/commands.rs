//! The three shell commands: play, selfplay and analyze.
//!
//! Each command takes its input and output streams explicitly so the
//! binary can hand it stdin/stdout and tests can hand it buffers.

use crate::config::OxoConfig;
use crate::contestants::{Contestant, HumanContestant, MinimaxContestant};
use crate::game_match::{Match, MatchOutcome};
use anyhow::Result;
use oxo_tictactoe::{Board, Evaluation, GameStatus, MinimaxBot, Player, Position, SearchStats};
use serde::Serialize;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// Asks for a marker until the answer is X or O. `None` on end of input.
#[instrument(skip_all)]
fn select_marker<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<Player>> {
    loop {
        write!(output, "Select player: [X, O] ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.parse::<Player>() {
            Ok(player) => return Ok(Some(player)),
            Err(e) => {
                debug!(%e, "Marker rejected");
                writeln!(output, "Invalid option")?;
            }
        }
    }
}

/// Writes the solver counters and cache size.
fn write_stats<W: Write>(output: &mut W, bot: &MinimaxBot) -> Result<()> {
    let stats = bot.stats();
    writeln!(
        output,
        "Solver: {} cached (X {}, O {}), {} expanded, {} leaves, {} cache hits",
        bot.cache().len(),
        bot.cache().len_for(Player::X),
        bot.cache().len_for(Player::O),
        stats.nodes_expanded(),
        stats.leaves_scored(),
        stats.cache_hits(),
    )?;
    Ok(())
}

/// Plays one interactive game of a human against the bot.
///
/// Returns `None` if the human never picked a marker.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &OxoConfig,
) -> Result<Option<MatchOutcome>> {
    let human = match *config.marker() {
        Some(marker) => marker,
        None => match select_marker(&mut input, &mut output)? {
            Some(marker) => marker,
            None => return Ok(None),
        },
    };
    info!(?human, "Human marker selected");

    let bot = Rc::new(RefCell::new(MinimaxBot::new()));
    let outcome = {
        let you: Box<dyn Contestant + '_> =
            Box::new(HumanContestant::new("You", &mut input, &mut output));
        let computer: Box<dyn Contestant + '_> =
            Box::new(MinimaxContestant::new("Computer", Rc::clone(&bot)));
        let mut game = match human {
            Player::X => Match::new(you, computer),
            Player::O => Match::new(computer, you),
        };
        game.run()?
    };

    if let MatchOutcome::Finished { status, board } = &outcome {
        writeln!(output, "{}", board)?;
        let message = match status {
            GameStatus::Won(winner) if *winner == human => "You won!",
            GameStatus::Won(_) => "You lost :-(",
            _ => "It's a draw",
        };
        writeln!(output, "{}", message)?;
    }
    if *config.show_stats() {
        write_stats(&mut output, &bot.borrow())?;
    }
    Ok(Some(outcome))
}

/// Plays the bot against itself, sharing one cache across all games.
///
/// With `opening`, X's first move is forced to that slot.
#[instrument(skip(output, config))]
pub fn selfplay<W: Write>(
    mut output: W,
    config: &OxoConfig,
    games: Option<u32>,
    opening: Option<usize>,
) -> Result<Vec<GameStatus>> {
    let games = games.unwrap_or(*config.selfplay_games());
    let (start, to_move) = match opening {
        Some(slot) => (
            Board::new().with_move(Player::X, Position::from_slot(slot)?)?,
            Player::O,
        ),
        None => (Board::new(), Player::X),
    };

    let bot = Rc::new(RefCell::new(MinimaxBot::new()));
    let mut results = Vec::new();
    for game in 1..=games {
        let x = Box::new(MinimaxContestant::new("bot X", Rc::clone(&bot)));
        let o = Box::new(MinimaxContestant::new("bot O", Rc::clone(&bot)));
        let outcome = Match::new(x, o)
            .starting_from(start.clone(), to_move)
            .run()?;

        match outcome {
            MatchOutcome::Finished { status, board } => {
                writeln!(output, "Game {}: {}", game, status)?;
                writeln!(output, "{}", board)?;
                results.push(status);
            }
            MatchOutcome::Abandoned { by, .. } => {
                anyhow::bail!("bot {} abandoned game {}", by, game);
            }
        }
        if *config.show_stats() {
            write_stats(&mut output, &bot.borrow())?;
        }
    }

    writeln!(output, "Cache entries: {}", bot.borrow().cache().len())?;
    Ok(results)
}

/// Analysis printed by `oxo analyze --json`.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Board as parsed.
    pub board: Board,
    /// Player the analysis is for.
    pub player: Player,
    /// Status of the board.
    pub status: GameStatus,
    /// Best move as a slot number (1-9).
    pub best_slot: Option<usize>,
    /// Best move and score.
    pub evaluation: Evaluation,
    /// Work done by the solver.
    pub stats: SearchStats,
}

/// Evaluates `board_text` for `player` and prints the result.
#[instrument(skip(output))]
pub fn analyze<W: Write>(
    mut output: W,
    board_text: &str,
    player: Player,
    json: bool,
) -> Result<Analysis> {
    let board: Board = board_text.parse()?;
    let mut bot = MinimaxBot::new();
    let evaluation = bot.evaluate(&board, player);
    let analysis = Analysis {
        status: board.status(),
        best_slot: evaluation.best_move().map(Position::slot),
        board,
        player,
        evaluation,
        stats: *bot.stats(),
    };

    if json {
        serde_json::to_writer_pretty(&mut output, &analysis)?;
        writeln!(output)?;
        return Ok(analysis);
    }

    writeln!(output, "{}", analysis.board)?;
    match analysis.evaluation.best_move() {
        Some(position) => writeln!(
            output,
            "Best move for {}: {} ({}), score {}",
            player,
            position.slot(),
            position,
            analysis.evaluation.score()
        )?,
        None => writeln!(output, "Game over: {}", analysis.status)?,
    }
    Ok(analysis)
}
