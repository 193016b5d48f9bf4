//! Board limits and engine parameters.
//!
//! Board size is chosen at runtime, so unlike a fixed-size engine nothing here
//! depends on a Cargo feature. These are the defaults the CLI and
//! [`EvaluatorConfig`](crate::evaluator::EvaluatorConfig) start from.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest playable board (3x3).
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest playable board. Rollout cost grows with the square of the size.
pub const MAX_BOARD_SIZE: usize = 11;

/// Size used when none (or an unsupported one) is requested.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Row/column offsets of the six hex neighbors.
///
/// All king-move offsets except `(-1, -1)` and `(1, 1)`, which are not
/// adjacent on the rhombus.
pub const HEX_OFFSETS: [(isize, isize); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)];

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Number of parallel workers per candidate move.
pub const DEFAULT_WORKERS: usize = 10;

/// Rollouts each worker runs on small boards.
pub const MAX_ROLLOUTS_PER_WORKER: usize = 150;

/// Boards up to this size use the full rollout cap.
pub const ROLLOUT_CAP_THRESHOLD: usize = 5;

/// Rollouts removed from the cap for each size step past the threshold.
pub const ROLLOUT_CAP_STEP: usize = 10;

/// The cap never drops below this.
pub const MIN_ROLLOUTS_PER_WORKER: usize = 1;
