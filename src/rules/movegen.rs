//! Move generation and application.
//!
//! Pieces move orthogonally only:
//! - **Simple move**: one step onto an empty neighbour.
//! - **Jump**: two steps in a straight line over an occupied neighbour (own
//!   or opponent) onto an empty landing cell. The jumped piece stays put;
//!   nothing is ever captured.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Direction, Player, Position, Rejection};

/// Targets reachable from one piece in one step or one jump.
///
/// At most one target per direction, so four fit inline without a heap
/// allocation. Iteration follows `Direction::ALL` order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSet(SmallVec<[Position; 4]>);

impl MoveSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Position] {
        &self.0
    }

    fn insert(&mut self, pos: Position) {
        if !self.contains(pos) {
            self.0.push(pos);
        }
    }
}

impl FromIterator<Position> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = MoveSet::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = Position;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Position>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Kind of relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Simple,
    Jump,
}

/// A single relocation of one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub kind: MoveKind,
}

impl Move {
    #[must_use]
    pub const fn simple(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Simple,
        }
    }

    #[must_use]
    pub const fn jump(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Jump,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = match self.kind {
            MoveKind::Simple => "->",
            MoveKind::Jump => "=>",
        };
        write!(f, "{} {} {}", self.from, arrow, self.to)
    }
}

/// Both target sets for one piece.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceMoves {
    pub simple: MoveSet,
    pub jumps: MoveSet,
}

impl PieceMoves {
    #[must_use]
    pub fn for_piece(board: &Board, pos: Position) -> Self {
        Self {
            simple: simple_moves(board, pos),
            jumps: jump_moves(board, pos),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.simple.is_empty() && self.jumps.is_empty()
    }
}

/// Empty orthogonal neighbours of the piece at `pos`.
///
/// An empty `pos` has no moves; that is not an error.
#[must_use]
pub fn simple_moves(board: &Board, pos: Position) -> MoveSet {
    if board.is_empty(pos) {
        return MoveSet::new();
    }

    Direction::ALL
        .iter()
        .filter_map(|&dir| pos.step(dir, 1))
        .filter(|&target| board.is_empty(target))
        .collect()
}

/// Landing cells for jumps by the piece at `pos`.
///
/// A direction yields a target when the adjacent cell holds any piece and the
/// cell beyond it is on the board and empty.
#[must_use]
pub fn jump_moves(board: &Board, pos: Position) -> MoveSet {
    if board.is_empty(pos) {
        return MoveSet::new();
    }

    Direction::ALL
        .iter()
        .filter_map(|&dir| {
            let over = pos.step(dir, 1)?;
            let landing = pos.step(dir, 2)?;
            (!board.is_empty(over) && board.is_empty(landing)).then_some(landing)
        })
        .collect()
}

/// Every move available to `player`, pieces in row-major order, simple
/// moves before jumps for each piece.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in board.pieces(player) {
        let piece = PieceMoves::for_piece(board, from);
        moves.extend(piece.simple.iter().map(|to| Move::simple(from, to)));
        moves.extend(piece.jumps.iter().map(|to| Move::jump(from, to)));
    }
    moves
}

/// Pieces of `player` that can move, with their targets.
#[must_use]
pub fn moves_by_piece(board: &Board, player: Player) -> FxHashMap<Position, PieceMoves> {
    board
        .pieces(player)
        .map(|pos| (pos, PieceMoves::for_piece(board, pos)))
        .filter(|(_, moves)| !moves.is_empty())
        .collect()
}

/// Move the piece at `from` one step to `to`.
pub fn apply_simple_move(board: &mut Board, from: Position, to: Position) -> Result<(), Rejection> {
    if board.is_empty(from) {
        return Err(Rejection::NoPieceAtPosition(from));
    }
    if !simple_moves(board, from).contains(to) {
        return Err(Rejection::IllegalTarget(to));
    }
    board.relocate(from, to);
    Ok(())
}

/// Jump the piece at `from` to `to`. The piece jumped over is left in place.
pub fn apply_jump(board: &mut Board, from: Position, to: Position) -> Result<(), Rejection> {
    if board.is_empty(from) {
        return Err(Rejection::NoPieceAtPosition(from));
    }
    if !jump_moves(board, from).contains(to) {
        return Err(Rejection::IllegalTarget(to));
    }
    board.relocate(from, to);
    Ok(())
}

/// Apply a move of either kind.
pub fn apply_move(board: &mut Board, mv: Move) -> Result<(), Rejection> {
    match mv.kind {
        MoveKind::Simple => apply_simple_move(board, mv.from, mv.to),
        MoveKind::Jump => apply_jump(board, mv.from, mv.to),
    }
}
