//! # nine-square
//!
//! Move generation and turn-state engine for Nine Square, a two-player game
//! on an 8x8 board.
//!
//! ## Rules
//!
//! Each player starts with nine pieces in a 3x3 corner block: Player One
//! (red) top-left, Player Two (blue) bottom-right. On their turn a player
//! either:
//!
//! - steps one piece one cell north, south, east or west onto an empty cell,
//!   which ends the turn, or
//! - jumps one piece over an adjacent piece (either colour) onto the empty
//!   cell directly beyond it. Nothing is captured. After a jump the same
//!   piece may keep jumping, or the player may end the turn.
//!
//! A player wins when all nine of their pieces sit in the opponent's home
//! block at the end of a turn. If both sides manage it on the same turn,
//! Player One wins.
//!
//! ## Modules
//!
//! - `core`: players, positions, board, errors
//! - `rules`: move generation, move application, win detection
//! - `game`: the turn machine and `GameEngine`
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use nine_square::{ClickOutcome, GameEngine, Player, Position};
//!
//! let mut game = GameEngine::new();
//! game.click(Position::new(2, 2));
//! let outcome = game.click(Position::new(3, 2));
//!
//! assert!(matches!(outcome, ClickOutcome::Moved { .. }));
//! assert_eq!(game.current_player(), Player::Two);
//! ```

pub mod core;
pub mod rules;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, Cell, Direction, Player, Position, Rejection, Zone, BOARD_SIZE,
    PIECES_PER_PLAYER,
};

pub use crate::rules::{
    check_win, jump_moves, legal_moves, simple_moves, GameOutcome, Move, MoveKind, MoveSet,
    PieceMoves,
};

pub use crate::game::{
    ClickOutcome, GameEngine, GameEngineBuilder, Intent, MoveReport, Status, TurnPhase,
    TurnReport, TurnState,
};
