//! The game engine: board, turn machine and outcome in one owned value.
//!
//! `GameEngine` is the only thing that mutates a game in progress. A
//! presentation layer translates raw input into [`Intent`]s (or calls the
//! finer-grained methods directly) and renders from the `&Board` and
//! `&TurnState` snapshots it hands out.
//!
//! Invalid intents never fail loudly. They come back as a [`Rejection`]
//! (inside [`ClickOutcome::Ignored`] or a report) and leave the game
//! unchanged. Two clicks drop the selection instead: an unrelated cell while
//! a piece is selected (outside a jump chain), and the active piece itself,
//! which also abandons a jump chain without ending the turn.

use tracing::{debug, trace};

use crate::core::{Board, BoardError, Player, Position, Rejection};
use crate::rules::{self, GameOutcome, Move, MoveSet, PieceMoves};

use super::turn::{ClickOutcome, Intent, TurnPhase, TurnState};

/// Result of [`GameEngine::attempt_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Whether the board changed.
    pub applied: bool,
    /// Turn state after the attempt.
    pub turn: TurnState,
    /// Outcome after the attempt.
    pub outcome: GameOutcome,
    /// Why the attempt was refused, if it was.
    pub rejection: Option<Rejection>,
}

/// Result of [`GameEngine::end_turn_voluntarily`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: TurnState,
    pub outcome: GameOutcome,
    pub rejection: Option<Rejection>,
}

/// One-line summary of the game for a status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Waiting on `player`; `jumping` if they are mid-chain.
    Turn { player: Player, jumping: bool },
    Won(Player),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Turn {
                player,
                jumping: false,
            } => write!(f, "{} Turn", player.color_name()),
            Status::Turn {
                player,
                jumping: true,
            } => write!(f, "{} Turn - Continue Jumping or End Turn", player.color_name()),
            Status::Won(player) => write!(f, "{} Wins!", player.color_name()),
        }
    }
}

/// A game of Nine Square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: TurnState,
    outcome: GameOutcome,
}

/// Builder for creating a GameEngine.
pub struct GameEngineBuilder {
    starting_player: Player,
    board: Board,
}

impl Default for GameEngineBuilder {
    fn default() -> Self {
        Self {
            starting_player: Player::One,
            board: Board::initial(),
        }
    }
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Who moves first. Defaults to Player One.
    pub fn starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Start from a custom position instead of the standard one.
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Build the engine, checking the board has nine pieces per side.
    pub fn build(self) -> Result<GameEngine, BoardError> {
        self.board.validate()?;
        Ok(GameEngine {
            board: self.board,
            turn: TurnState::new(self.starting_player),
            outcome: GameOutcome::InProgress,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// A new game from the standard starting position, Player One to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            turn: TurnState::new(Player::One),
            outcome: GameOutcome::InProgress,
        }
    }

    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn.player()
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    #[must_use]
    pub fn simple_moves(&self, pos: Position) -> MoveSet {
        rules::simple_moves(&self.board, pos)
    }

    #[must_use]
    pub fn jump_moves(&self, pos: Position) -> MoveSet {
        rules::jump_moves(&self.board, pos)
    }

    /// Moves the current player may make right now.
    ///
    /// Mid-chain this is only the chaining piece's jumps; after the game ends
    /// it is empty.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        match self.turn.phase() {
            TurnPhase::JumpChain { piece, jumps } => {
                jumps.iter().map(|to| Move::jump(*piece, to)).collect()
            }
            _ => rules::legal_moves(&self.board, self.current_player()),
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match self.outcome {
            GameOutcome::Won(player) => Status::Won(player),
            GameOutcome::InProgress => Status::Turn {
                player: self.current_player(),
                jumping: self.turn.in_jump_chain(),
            },
        }
    }

    // === Intents ===

    /// Apply a translated input event.
    pub fn apply(&mut self, intent: Intent) -> ClickOutcome {
        match intent {
            Intent::Click(pos) => self.click(pos),
            Intent::EndTurn => match self.finish_chain() {
                Ok(outcome) => ClickOutcome::TurnEnded { outcome },
                Err(rejection) => self.ignore(rejection),
            },
        }
    }

    /// Handle a click on a board cell.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if self.is_game_over() {
            return self.ignore(Rejection::GameOver);
        }

        let result = match self.turn.phase().clone() {
            TurnPhase::Idle => self.select_piece(pos).map(|_| ClickOutcome::Selected(pos)),
            TurnPhase::Selected {
                piece,
                simple,
                jumps,
            } => {
                if pos == piece {
                    Ok(self.deselect())
                } else if jumps.contains(pos) {
                    self.jump(piece, pos)
                } else if simple.contains(pos) {
                    self.step(piece, pos)
                } else if self.board.owner(pos) == Some(self.current_player()) {
                    self.select_piece(pos).map(|_| ClickOutcome::Selected(pos))
                } else {
                    Ok(self.deselect())
                }
            }
            TurnPhase::JumpChain { piece, jumps } => {
                if pos == piece {
                    Ok(self.deselect())
                } else if jumps.contains(pos) {
                    self.jump(piece, pos)
                } else {
                    Err(Rejection::IllegalTarget(pos))
                }
            }
        };

        result.unwrap_or_else(|rejection| self.ignore(rejection))
    }

    /// Select one of the current player's pieces.
    ///
    /// Re-selecting the selected piece is a no-op. Mid-chain only the
    /// chaining piece may be named.
    pub fn select_piece(&mut self, pos: Position) -> Result<&TurnState, Rejection> {
        if self.is_game_over() {
            return Err(Rejection::GameOver);
        }

        match self.turn.phase() {
            TurnPhase::JumpChain { piece, .. } if *piece == pos => return Ok(&self.turn),
            TurnPhase::JumpChain { .. } => return Err(Rejection::ChainInProgress),
            TurnPhase::Selected { piece, .. } if *piece == pos => return Ok(&self.turn),
            _ => {}
        }

        self.check_own_piece(pos)?;
        self.turn.select(pos, PieceMoves::for_piece(&self.board, pos));
        trace!(player = %self.current_player(), piece = %pos, "selected");
        Ok(&self.turn)
    }

    /// Move the current player's piece from `from` to `to` in one call.
    ///
    /// `to` is tried as a jump first, then as a simple move. A refused
    /// attempt changes nothing, including the current selection.
    pub fn attempt_move(&mut self, from: Position, to: Position) -> MoveReport {
        let result = self.try_move(from, to);
        let rejection = result.err();
        if let Some(rejection) = rejection {
            trace!(%from, %to, %rejection, "move refused");
        }
        MoveReport {
            applied: rejection.is_none(),
            turn: self.turn.clone(),
            outcome: self.outcome,
            rejection,
        }
    }

    /// End the turn mid-chain even though more jumps are available.
    pub fn end_turn_voluntarily(&mut self) -> TurnReport {
        let rejection = self.finish_chain().err();
        TurnReport {
            turn: self.turn.clone(),
            outcome: self.outcome,
            rejection,
        }
    }

    // === Internals ===

    fn try_move(&mut self, from: Position, to: Position) -> Result<ClickOutcome, Rejection> {
        if self.is_game_over() {
            return Err(Rejection::GameOver);
        }

        if let TurnPhase::JumpChain { piece, jumps } = self.turn.phase() {
            if *piece != from {
                return Err(Rejection::ChainInProgress);
            }
            if !jumps.contains(to) {
                return Err(Rejection::IllegalTarget(to));
            }
            return self.jump(from, to);
        }

        self.check_own_piece(from)?;
        let moves = PieceMoves::for_piece(&self.board, from);
        if moves.jumps.contains(to) {
            self.jump(from, to)
        } else if moves.simple.contains(to) {
            self.step(from, to)
        } else {
            Err(Rejection::IllegalTarget(to))
        }
    }

    fn check_own_piece(&self, pos: Position) -> Result<(), Rejection> {
        match self.board.owner(pos) {
            None => Err(Rejection::NoPieceAtPosition(pos)),
            Some(owner) if owner != self.current_player() => Err(Rejection::NotYourPiece(pos)),
            Some(_) => Ok(()),
        }
    }

    fn jump(&mut self, from: Position, to: Position) -> Result<ClickOutcome, Rejection> {
        rules::apply_jump(&mut self.board, from, to)?;
        let mv = Move::jump(from, to);

        let further = rules::jump_moves(&self.board, to);
        let chain_continues = !further.is_empty();
        debug!(player = %self.current_player(), %mv, chain_continues, "jump");

        let outcome = if chain_continues {
            self.turn.continue_chain(to, further);
            self.outcome
        } else {
            self.end_turn()
        };

        Ok(ClickOutcome::Jumped {
            mv,
            chain_continues,
            outcome,
        })
    }

    fn step(&mut self, from: Position, to: Position) -> Result<ClickOutcome, Rejection> {
        rules::apply_simple_move(&mut self.board, from, to)?;
        let mv = Move::simple(from, to);
        debug!(player = %self.current_player(), %mv, "move");
        let outcome = self.end_turn();
        Ok(ClickOutcome::Moved { mv, outcome })
    }

    fn finish_chain(&mut self) -> Result<GameOutcome, Rejection> {
        if self.is_game_over() {
            return Err(Rejection::GameOver);
        }
        if !self.turn.in_jump_chain() {
            return Err(Rejection::NoJumpChain);
        }
        debug!(player = %self.current_player(), "turn ended voluntarily");
        Ok(self.end_turn())
    }

    fn deselect(&mut self) -> ClickOutcome {
        self.turn.clear();
        trace!(player = %self.current_player(), "deselected");
        ClickOutcome::Deselected
    }

    /// Clear the selection, check for a winner, then hand over the turn.
    fn end_turn(&mut self) -> GameOutcome {
        let player = self.current_player();
        self.turn.clear();

        self.outcome = rules::check_win(&self.board);
        match self.outcome {
            GameOutcome::Won(winner) => debug!(%winner, "game over"),
            GameOutcome::InProgress => {
                self.turn.pass_to(player.opponent());
                debug!(%player, next = %player.opponent(), "turn ended");
            }
        }
        self.outcome
    }

    fn ignore(&self, rejection: Rejection) -> ClickOutcome {
        trace!(player = %self.current_player(), %rejection, "intent ignored");
        ClickOutcome::Ignored(rejection)
    }
}
