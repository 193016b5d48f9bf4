//! Flat Monte Carlo move evaluation.
//!
//! Every free cell is tried as the next move. For each one a fixed batch of
//! random playouts is split evenly across a set of worker threads; each worker
//! runs its share on a private board with its own random stream. The score of
//! a candidate is the fraction of its playouts won by the evaluating side, and
//! the highest score wins, ties going to the first candidate in row-major
//! order.
//!
//! There is no tree and no exploration term: all candidates get the same
//! number of playouts.

use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use fastrand::Rng;
use log::{debug, info, trace, warn};

use crate::board::Board;
use crate::constants::{DEFAULT_WORKERS, MAX_ROLLOUTS_PER_WORKER};
use crate::error::{HexError, Result};
use crate::playout::{Playout, rollout_cap};
use crate::position::{Coordinate, Side};

/// Knobs for the evaluator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Worker threads per candidate.
    pub workers: usize,
    /// Playouts each worker runs per candidate.
    pub rollouts_per_worker: usize,
    /// Base seed for the worker streams. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Stop scoring new candidates once this much time has passed.
    /// At least one candidate is always scored.
    pub time_limit: Option<Duration>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            rollouts_per_worker: MAX_ROLLOUTS_PER_WORKER,
            seed: None,
            time_limit: None,
        }
    }
}

impl EvaluatorConfig {
    /// Default configuration with the rollout cap for a board of `size`.
    pub fn for_size(size: usize) -> Self {
        Self {
            rollouts_per_worker: rollout_cap(size),
            ..Self::default()
        }
    }

    /// Total playouts per candidate.
    pub fn batch_size(&self) -> usize {
        self.workers * self.rollouts_per_worker
    }

    fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(HexError::config("worker count must be positive"));
        }
        if self.rollouts_per_worker == 0 {
            return Err(HexError::config("rollout batch size must be positive"));
        }
        Ok(())
    }
}

/// A candidate move and the fraction of playouts it won.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoredMove {
    pub position: Coordinate,
    pub score: f64,
}

/// Pick the highest-scoring move. Earlier entries win ties.
pub fn select_best(moves: &[ScoredMove]) -> Option<ScoredMove> {
    moves.iter().copied().fold(None, |best, m| match best {
        Some(b) if b.score >= m.score => Some(b),
        _ => Some(m),
    })
}

/// Monte Carlo move picker.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Pick a move for `side` and play it on `board`.
    pub fn choose_move(&self, board: &mut Board, side: Side) -> Result<Coordinate> {
        let best = self.best_move(board, side)?;
        board.try_place(side, best.position)?;
        info!(
            "side {side} plays {} (score {:.3})",
            best.position, best.score
        );
        Ok(best.position)
    }

    /// The best move for `side`, without playing it.
    pub fn best_move(&self, board: &Board, side: Side) -> Result<ScoredMove> {
        let scores = self.evaluate(board, side)?;
        select_best(&scores).ok_or(HexError::NoLegalMove)
    }

    /// Score every free cell in row-major order.
    ///
    /// With a time limit the list may stop short; it always holds at least
    /// the first candidate.
    pub fn evaluate(&self, board: &Board, side: Side) -> Result<Vec<ScoredMove>> {
        self.config.validate()?;
        let candidates: Vec<Coordinate> = board.free_cells().collect();
        if candidates.is_empty() {
            return Err(HexError::NoLegalMove);
        }
        debug!(
            "evaluating {} candidates for side {side}: {} workers x {} playouts",
            candidates.len(),
            self.config.workers,
            self.config.rollouts_per_worker
        );

        let start = Instant::now();
        let mut scores = Vec::with_capacity(candidates.len());
        for (i, &coord) in candidates.iter().enumerate() {
            let score = self.score_move(board, coord, side);
            debug!("candidate {coord}: {score:.3}");
            scores.push(ScoredMove {
                position: coord,
                score,
            });

            let left = candidates.len() - i - 1;
            if let Some(limit) = self.config.time_limit {
                if left > 0 && start.elapsed() >= limit {
                    warn!(
                        "time limit {limit:?} reached, skipping {left} of {} candidates",
                        candidates.len()
                    );
                    break;
                }
            }
        }
        Ok(scores)
    }

    /// Win rate for `side` when it plays `coord` next.
    ///
    /// Blocks until every worker has finished its share.
    pub fn score_move(&self, board: &Board, coord: Coordinate, side: Side) -> f64 {
        let per_worker = self.config.rollouts_per_worker;
        let candidate = (coord.row * board.size() + coord.col) as u64;

        let fractions: Vec<f64> = thread::scope(|s| {
            let handles: Vec<_> = (0..self.config.workers)
                .map(|w| {
                    let mut rng = self.worker_rng(candidate, w as u64);
                    s.spawn(move || {
                        let mut playout = Playout::new(board, coord, side);
                        let wins = playout.wins(per_worker, &mut rng);
                        trace!("{coord} worker {w}: {wins}/{per_worker}");
                        wins as f64 / per_worker as f64
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect()
        });

        fractions.iter().sum::<f64>() / fractions.len() as f64
    }

    fn worker_rng(&self, candidate: u64, worker: u64) -> Rng {
        match self.config.seed {
            Some(seed) => Rng::with_seed(mix(mix(seed ^ candidate) ^ worker)),
            None => Rng::new(),
        }
    }
}

/// SplitMix64 finalizer, to spread nearby seeds apart.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
