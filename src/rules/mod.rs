//! Game rules: move generation, move application and win detection.
//!
//! Everything here is a pure function of a `Board`. Turn order, selection
//! and jump chaining are the turn machine's job (see `game`).

pub mod movegen;
pub mod outcome;

pub use movegen::{
    apply_jump, apply_move, apply_simple_move, jump_moves, legal_moves, moves_by_piece,
    simple_moves, Move, MoveKind, MoveSet, PieceMoves,
};
pub use outcome::{check_win, GameOutcome};
