//! Error types.
//!
//! `BoardError` covers malformed or invalid board layouts. `Rejection` is the
//! reason an intent had no effect; interactive callers are free to ignore it,
//! since a rejected intent leaves the game untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::Player;
use super::position::Position;

/// A board layout that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 8 rows, found {found}")]
    RowCount { found: usize },
    #[error("row {row} has {found} cells, expected 8")]
    RowLength { row: usize, found: usize },
    #[error("unknown cell character {ch:?} in row {row}")]
    UnknownCell { row: usize, ch: char },
    #[error("{player} has {found} pieces, expected 9")]
    PieceCount { player: Player, found: usize },
}

/// Why the engine refused an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,
    #[error("no piece at {0}")]
    NoPieceAtPosition(Position),
    #[error("the piece at {0} belongs to the other player")]
    NotYourPiece(Position),
    #[error("{0} is not a legal target")]
    IllegalTarget(Position),
    #[error("a jump chain is in progress")]
    ChainInProgress,
    #[error("no jump chain is in progress")]
    NoJumpChain,
    #[error("no piece is selected")]
    NothingSelected,
}
