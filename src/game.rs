//! Turn-by-turn game state.
//!
//! [`Game`] owns the authoritative board. It applies human moves, asks the
//! [`Evaluator`] for computer moves, and checks for a winner after every
//! stone. Side A always moves first.

use log::info;

use crate::board::Board;
use crate::error::{HexError, Result};
use crate::evaluator::Evaluator;
use crate::pathfinder::has_won;
use crate::position::{Coordinate, Side};

/// Who picks the moves for a side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer,
}

/// What happened after a stone was placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The game goes on with this side to move.
    Next(Side),
    /// This side just completed its connection.
    Won(Side),
}

pub struct Game {
    board: Board,
    to_move: Side,
    controllers: [Controller; 2],
    evaluator: Evaluator,
    winner: Option<Side>,
    history: Vec<(Side, Coordinate)>,
}

impl Game {
    pub fn new(size: usize, a: Controller, b: Controller, evaluator: Evaluator) -> Result<Self> {
        Ok(Self {
            board: Board::new(size)?,
            to_move: Side::A,
            controllers: [a, b],
            evaluator,
            winner: None,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[(Side, Coordinate)] {
        &self.history
    }

    pub fn controller(&self, side: Side) -> Controller {
        match side {
            Side::A => self.controllers[0],
            Side::B => self.controllers[1],
        }
    }

    /// Play `coord` for the side to move.
    ///
    /// A rejected move leaves the game unchanged and the same side to move.
    pub fn play(&mut self, coord: Coordinate) -> Result<Turn> {
        self.check_running()?;
        let side = self.to_move;
        self.board.try_place(side, coord)?;
        Ok(self.finish_turn(side, coord))
    }

    /// Let the evaluator choose and play for the side to move.
    pub fn play_computer(&mut self) -> Result<(Coordinate, Turn)> {
        self.check_running()?;
        let side = self.to_move;
        let coord = self.evaluator.choose_move(&mut self.board, side)?;
        Ok((coord, self.finish_turn(side, coord)))
    }

    fn check_running(&self) -> Result<()> {
        match self.winner {
            Some(winner) => Err(HexError::GameOver { winner }),
            None => Ok(()),
        }
    }

    fn finish_turn(&mut self, side: Side, coord: Coordinate) -> Turn {
        self.history.push((side, coord));
        if has_won(&mut self.board, side) {
            info!("side {side} wins after {} moves", self.history.len());
            self.winner = Some(side);
            return Turn::Won(side);
        }
        self.to_move = side.opponent();
        Turn::Next(self.to_move)
    }
}
