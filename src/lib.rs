//! hex-mc: a Hex engine driven by flat Monte Carlo playouts.
//!
//! The computer player scores every free cell by filling the rest of the
//! board at random many times over, in parallel, and playing the cell whose
//! playouts it won most often.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and engine parameters
//! - [`position`] - Coordinates, sides and cell marks
//! - [`board`] - Board state, hex adjacency and placement
//! - [`pathfinder`] - Win detection
//! - [`playout`] - Random game simulation
//! - [`evaluator`] - Parallel Monte Carlo move selection
//! - [`game`] - Turn handling for a full game
//! - [`console`] - Text front end
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use hex_mc::board::Board;
//! use hex_mc::evaluator::{Evaluator, EvaluatorConfig};
//! use hex_mc::pathfinder::has_won;
//! use hex_mc::position::{Coordinate, Side};
//!
//! let mut board = Board::new(5).unwrap();
//! board.place(Side::A, Coordinate::new(2, 2));
//!
//! let evaluator = Evaluator::new(EvaluatorConfig {
//!     workers: 2,
//!     rollouts_per_worker: 10,
//!     ..EvaluatorConfig::default()
//! });
//! let reply = evaluator.choose_move(&mut board, Side::B).unwrap();
//! println!("Side B plays {reply}");
//! assert!(!has_won(&mut board, Side::B));
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod game;
pub mod pathfinder;
pub mod playout;
pub mod position;
