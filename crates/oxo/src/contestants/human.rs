//! Human contestant reading moves from a line-oriented input.

use super::{Choice, Contestant};
use anyhow::Result;
use oxo_tictactoe::{Board, Player, Position};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Shown for `h`/`help`.
pub const HELP_TEXT: &str = "\
Enter the number or name (e.g. center) of an empty square:

 1 | 2 | 3
---+---+---
 4 | 5 | 6
---+---+---
 7 | 8 | 9

Q to quit. H for help.";

/// Human player typing slot numbers or square labels.
///
/// Lines starting with `q` quit and lines starting with `h` print help,
/// ignoring case. No square label starts with either letter. Anything that is not an empty square is reported and the
/// prompt repeats. End of input counts as quitting.
pub struct HumanContestant<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanContestant<R, W> {
    /// Creates a new human contestant.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Parses one line into a decision, `None` meaning "ask again".
    #[instrument(skip(self, board))]
    fn interpret(&mut self, line: &str, board: &Board) -> Result<Option<Choice>> {
        let trimmed = line.trim();
        match trimmed.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('Q') => {
                writeln!(self.output, "Quitter...")?;
                return Ok(Some(Choice::Quit));
            }
            Some('H') => {
                writeln!(self.output, "{}", HELP_TEXT)?;
                return Ok(None);
            }
            _ => {}
        }

        match Position::from_label_or_number(trimmed) {
            Some(position) if board.is_empty(position) => Ok(Some(Choice::Play(position))),
            _ => {
                debug!(input = trimmed, "Rejected move");
                writeln!(
                    self.output,
                    "Illegal move {}. Q to quit. H for help",
                    trimmed
                )?;
                Ok(None)
            }
        }
    }
}

impl<R: BufRead, W: Write> Contestant for HumanContestant<R, W> {
    fn choose_move(&mut self, board: &Board, _mark: Player) -> Result<Choice> {
        writeln!(self.output, "{}", board)?;
        loop {
            write!(self.output, "Input move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!(player = %self.name, "Input closed");
                return Ok(Choice::Quit);
            }

            if let Some(choice) = self.interpret(&line, board)? {
                return Ok(choice);
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
