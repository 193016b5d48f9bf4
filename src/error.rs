//! Error types for the hex engine.

use thiserror::Error;

use crate::position::{Coordinate, Side};

/// Errors raised by the board and the move evaluator.
///
/// `OutOfRange`, `CellOccupied` and `GameOver` are ordinary rejected moves;
/// the caller is expected to ask again or stop. `NoLegalMove` and
/// `InvalidConfiguration` mean the caller set things up wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("coordinate {coord} is outside a {size}x{size} board")]
    OutOfRange { coord: Coordinate, size: usize },

    #[error("cell {coord} is already occupied")]
    CellOccupied { coord: Coordinate },

    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("game is already over: side {winner} has won")]
    GameOver { winner: Side },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl HexError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        HexError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HexError>;
