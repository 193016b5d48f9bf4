//! Line-oriented text session.
//!
//! Drives a [`Game`] over any reader/writer pair: the board is printed before
//! every move, human moves are read as `row,col` lines, and computer moves are
//! announced. Bad input is reported and asked for again.
//!
//! ## Input
//!
//! - `row,col` - place a stone for the side to move
//! - `quit` - leave the game
//! - empty lines and lines starting with `#` are skipped
//!
//! ## Example
//!
//! ```ignore
//! use hex_mc::console::Session;
//! let stdin = std::io::stdin();
//! let mut session = Session::new(game, stdin.lock(), std::io::stdout());
//! session.run()?;
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::error::HexError;
use crate::game::{Controller, Game, Turn};
use crate::position::{Side, parse_coord};

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won(Side),
    /// The player typed `quit` or the input ran out.
    Abandoned,
}

pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until someone wins or the input ends.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            self.show_board()?;
            let side = self.game.to_move();

            let turn = match self.game.controller(side) {
                Controller::Computer => {
                    writeln!(self.output, "Side {side} is thinking...")?;
                    let (coord, turn) = self
                        .game
                        .play_computer()
                        .with_context(|| format!("computer move for side {side}"))?;
                    writeln!(self.output, "Side {side} plays {coord}")?;
                    turn
                }
                Controller::Human => {
                    write!(self.output, "Side {side} move (row,col): ")?;
                    self.output.flush()?;
                    match self.read_move()? {
                        Some(turn) => turn,
                        None => return Ok(Outcome::Abandoned),
                    }
                }
            };

            if let Turn::Won(winner) = turn {
                self.show_board()?;
                writeln!(self.output, "Side {winner} has won!")?;
                return Ok(Outcome::Won(winner));
            }
        }
    }

    /// Read lines until one is a legal move for the side to move.
    fn read_move(&mut self) -> Result<Option<Turn>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }

            let Some(coord) = parse_coord(line) else {
                writeln!(self.output, "Invalid move! Expected row,col (got {line:?})")?;
                continue;
            };
            match self.game.play(coord) {
                Ok(turn) => return Ok(Some(turn)),
                Err(
                    e @ (HexError::OutOfRange { .. }
                    | HexError::CellOccupied { .. }
                    | HexError::GameOver { .. }),
                ) => {
                    writeln!(self.output, "Invalid move! {e}")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn show_board(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", self.game.board())?;
        Ok(())
    }
}
