//! Per-turn interaction state.
//!
//! ## Phases
//!
//! ```text
//!   Idle ──select own piece──▶ Selected ──jump, more jumps──▶ JumpChain
//!    ▲                           │  │                            │  │
//!    │◀──deselect / other cell───┘  │                            │  │ jump, more jumps
//!    │                              │ step, or last jump         │◀─┘
//!    │◀──────── turn ends ──────────┘◀── last jump / end turn ───┘
//! ```
//!
//! Clicking the active piece returns to `Idle` from either `Selected` or
//! `JumpChain`; the turn stays with the same player.
//!
//! `TurnState` is reset whenever a turn ends. It never outlives the turn it
//! describes.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Position, Rejection};
use crate::rules::{GameOutcome, Move, MoveSet, PieceMoves};

/// Where the current player is within their turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing selected.
    #[default]
    Idle,
    /// A piece is selected; both target sets are live.
    Selected {
        piece: Position,
        simple: MoveSet,
        jumps: MoveSet,
    },
    /// The piece has jumped and can jump again. Only further jumps, an
    /// explicit end of turn, or a click on the piece itself are accepted.
    JumpChain { piece: Position, jumps: MoveSet },
}

/// Snapshot of the current turn, handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    player: Player,
    phase: TurnPhase,
}

impl TurnState {
    /// Fresh turn for `player`.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self {
            player,
            phase: TurnPhase::Idle,
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// The selected (or chaining) piece.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        match &self.phase {
            TurnPhase::Idle => None,
            TurnPhase::Selected { piece, .. } | TurnPhase::JumpChain { piece, .. } => Some(*piece),
        }
    }

    /// Simple-move targets of the selected piece. Always empty mid-chain.
    #[must_use]
    pub fn simple_targets(&self) -> &[Position] {
        match &self.phase {
            TurnPhase::Selected { simple, .. } => simple.as_slice(),
            _ => &[],
        }
    }

    /// Jump targets of the selected piece.
    #[must_use]
    pub fn jump_targets(&self) -> &[Position] {
        match &self.phase {
            TurnPhase::Selected { jumps, .. } | TurnPhase::JumpChain { jumps, .. } => jumps.as_slice(),
            TurnPhase::Idle => &[],
        }
    }

    #[must_use]
    pub fn in_jump_chain(&self) -> bool {
        matches!(self.phase, TurnPhase::JumpChain { .. })
    }

    /// True if `pos` should be highlighted as a destination.
    #[must_use]
    pub fn is_target(&self, pos: Position) -> bool {
        self.simple_targets().contains(&pos) || self.jump_targets().contains(&pos)
    }

    pub(crate) fn select(&mut self, piece: Position, moves: PieceMoves) {
        self.phase = TurnPhase::Selected {
            piece,
            simple: moves.simple,
            jumps: moves.jumps,
        };
    }

    pub(crate) fn continue_chain(&mut self, piece: Position, jumps: MoveSet) {
        self.phase = TurnPhase::JumpChain { piece, jumps };
    }

    pub(crate) fn clear(&mut self) {
        self.phase = TurnPhase::Idle;
    }

    /// Clear the selection and hand the turn to `next`.
    pub(crate) fn pass_to(&mut self, next: Player) {
        self.player = next;
        self.phase = TurnPhase::Idle;
    }
}

/// Something the player asked for, already translated from raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// A click on a board cell.
    Click(Position),
    /// The "end turn" button, only meaningful mid-chain.
    EndTurn,
}

/// What a click or intent did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// A piece is now selected.
    Selected(Position),
    /// The selection was dropped.
    Deselected,
    /// A simple move was made; the turn is over.
    Moved { mv: Move, outcome: GameOutcome },
    /// A jump was made. If `chain_continues` the same player must jump again
    /// or end the turn; otherwise the turn is over.
    Jumped {
        mv: Move,
        chain_continues: bool,
        outcome: GameOutcome,
    },
    /// The turn was ended voluntarily mid-chain.
    TurnEnded { outcome: GameOutcome },
    /// Nothing changed.
    Ignored(Rejection),
}

impl ClickOutcome {
    /// True if the intent changed nothing.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, ClickOutcome::Ignored(_))
    }

    /// True if the intent completed the turn.
    #[must_use]
    pub fn ended_turn(&self) -> bool {
        matches!(
            self,
            ClickOutcome::Moved { .. }
                | ClickOutcome::TurnEnded { .. }
                | ClickOutcome::Jumped {
                    chain_continues: false,
                    ..
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_turn_is_idle() {
        let turn = TurnState::new(Player::One);
        assert_eq!(turn.player(), Player::One);
        assert_eq!(turn.phase(), &TurnPhase::Idle);
        assert_eq!(turn.selected(), None);
        assert!(turn.simple_targets().is_empty());
        assert!(turn.jump_targets().is_empty());
        assert!(!turn.in_jump_chain());
    }

    #[test]
    fn test_chain_hides_simple_targets() {
        let piece = Position::new(3, 2);
        let mut turn = TurnState::new(Player::One);
        turn.select(
            piece,
            PieceMoves {
                simple: [Position::new(4, 2)].into_iter().collect(),
                jumps: [Position::new(3, 4)].into_iter().collect(),
            },
        );
        assert!(turn.is_target(Position::new(4, 2)));

        turn.continue_chain(piece, [Position::new(3, 4)].into_iter().collect());
        assert!(turn.in_jump_chain());
        assert_eq!(turn.selected(), Some(piece));
        assert!(turn.simple_targets().is_empty());
        assert_eq!(turn.jump_targets(), &[Position::new(3, 4)]);
        assert!(!turn.is_target(Position::new(4, 2)));
    }

    #[test]
    fn test_pass_to_resets() {
        let mut turn = TurnState::new(Player::One);
        turn.continue_chain(Position::new(3, 2), MoveSet::new());
        turn.pass_to(Player::Two);
        assert_eq!(turn, TurnState::new(Player::Two));
    }

    #[test]
    fn test_click_outcome_ended_turn() {
        let mv = Move::jump(Position::new(1, 2), Position::new(3, 2));
        let outcome = GameOutcome::InProgress;

        assert!(ClickOutcome::Jumped { mv, chain_continues: false, outcome }.ended_turn());
        assert!(!ClickOutcome::Jumped { mv, chain_continues: true, outcome }.ended_turn());
        assert!(ClickOutcome::TurnEnded { outcome }.ended_turn());
        assert!(!ClickOutcome::Deselected.ended_turn());
        assert!(ClickOutcome::Ignored(Rejection::GameOver).is_ignored());
    }

    #[test]
    fn test_turn_state_serialization() {
        let mut turn = TurnState::new(Player::Two);
        turn.continue_chain(Position::new(4, 4), [Position::new(2, 4)].into_iter().collect());

        let json = serde_json::to_string(&turn).unwrap();
        let deserialized: TurnState = serde_json::from_str(&json).unwrap();
        assert_eq!(turn, deserialized);
    }
}
