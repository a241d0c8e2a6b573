//! Core types: players, positions, the board, errors.
//!
//! These are plain data. The rules live in `rules`, the turn machine in
//! `game`.

pub mod player;
pub mod position;
pub mod board;
pub mod error;

pub use player::Player;
pub use position::{Direction, Position, BOARD_SIZE};
pub use board::{Board, Cell, Zone, PIECES_PER_PLAYER};
pub use error::{BoardError, Rejection};
