//! Monte Carlo playouts (random game simulation).
//!
//! A playout takes a position plus one candidate move, then fills every
//! remaining cell with alternating random stones. Hex cannot end in a draw,
//! so once the board is full exactly one side has a connection and a single
//! win check decides the result.

use fastrand::Rng;

use crate::board::Board;
use crate::constants::{
    MAX_ROLLOUTS_PER_WORKER, MIN_ROLLOUTS_PER_WORKER, ROLLOUT_CAP_STEP, ROLLOUT_CAP_THRESHOLD,
};
use crate::pathfinder::has_won;
use crate::position::{Coordinate, Side};

/// Rollouts per worker for a board of the given size.
///
/// Full cap up to the threshold size, then ten fewer per size step past 6,
/// never less than one.
pub fn rollout_cap(size: usize) -> usize {
    if size <= ROLLOUT_CAP_THRESHOLD {
        return MAX_ROLLOUTS_PER_WORKER;
    }
    let reduction = ROLLOUT_CAP_STEP * size.saturating_sub(ROLLOUT_CAP_THRESHOLD + 1);
    MAX_ROLLOUTS_PER_WORKER
        .saturating_sub(reduction)
        .max(MIN_ROLLOUTS_PER_WORKER)
}

/// Play one full random game after `side` takes `first_move`, returning the winner.
///
/// `first_move` must be free on `board`. The board itself is not touched.
pub fn simulate(board: &Board, first_move: Coordinate, side: Side, rng: &mut Rng) -> Side {
    let mut scratch = board.clone();
    scratch.place(side, first_move);
    random_fill(&mut scratch, side.opponent(), rng);
    outcome(&mut scratch, side)
}

/// Fill every free cell, alternating sides starting with `to_move`.
///
/// Cells are drawn uniformly; a draw that hits an occupied cell is discarded
/// and redrawn.
pub fn random_fill(board: &mut Board, to_move: Side, rng: &mut Rng) {
    let size = board.size();
    let mut player = to_move;
    while !board.is_full() {
        let coord = Coordinate::new(rng.usize(..size), rng.usize(..size));
        if board.place(player, coord) {
            player = player.opponent();
        }
    }
}

/// Winner of a full board, checking only `side`.
fn outcome(board: &mut Board, side: Side) -> Side {
    if has_won(board, side) {
        side
    } else {
        side.opponent()
    }
}

/// Repeated playouts from one fixed starting position.
///
/// Keeps a snapshot of the position after the candidate move and a scratch
/// board that is reset from it before each run, so a batch allocates once.
pub struct Playout {
    snapshot: Board,
    scratch: Board,
    side: Side,
}

impl Playout {
    pub fn new(board: &Board, first_move: Coordinate, side: Side) -> Self {
        let mut snapshot = board.clone();
        snapshot.place(side, first_move);
        let scratch = snapshot.clone();
        Self {
            snapshot,
            scratch,
            side,
        }
    }

    /// Run one playout and return the winner.
    pub fn run(&mut self, rng: &mut Rng) -> Side {
        self.scratch.reset(&self.snapshot);
        random_fill(&mut self.scratch, self.side.opponent(), rng);
        outcome(&mut self.scratch, self.side)
    }

    /// Run `n` playouts and count how many `side` won.
    pub fn wins(&mut self, n: usize, rng: &mut Rng) -> usize {
        (0..n).filter(|_| self.run(rng) == self.side).count()
    }
}
