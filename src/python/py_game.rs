//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{Board, Player};
use crate::game::{ClickOutcome, GameEngine};

use super::py_core::{to_player, to_position, to_tuples, PyPlayer};

/// Python wrapper for GameEngine.
///
/// Intents return a short string naming what happened: "selected",
/// "deselected", "moved", "jumped", "chain", "turn_ended" or "ignored".
#[pyclass(name = "GameEngine")]
pub struct PyGameEngine {
    engine: GameEngine,
}

#[pymethods]
impl PyGameEngine {
    /// Create a new game.
    ///
    /// # Arguments
    /// - starting_player: 1 or 2
    /// - layout: optional board text (8 lines of `.`, `1`, `2`)
    #[new]
    #[pyo3(signature = (starting_player = 1, layout = None))]
    fn new(starting_player: u8, layout: Option<&str>) -> PyResult<Self> {
        let player = to_player(starting_player)?;
        let board = match layout {
            Some(text) => text.parse::<Board>().map_err(value_error)?,
            None => Board::initial(),
        };
        let engine = GameEngine::builder()
            .starting_player(player)
            .board(board)
            .build()
            .map_err(value_error)?;
        Ok(Self { engine })
    }

    /// Click a board cell.
    fn click(&mut self, row: i32, col: i32) -> PyResult<&'static str> {
        let pos = to_position(row, col)?;
        Ok(outcome_name(self.engine.click(pos)))
    }

    /// Press "End Turn" (only has an effect mid-chain).
    fn end_turn(&mut self) -> &'static str {
        let report = self.engine.end_turn_voluntarily();
        if report.rejection.is_some() {
            "ignored"
        } else {
            "turn_ended"
        }
    }

    /// Select a piece. Returns False if the selection was refused.
    fn select_piece(&mut self, row: i32, col: i32) -> PyResult<bool> {
        let pos = to_position(row, col)?;
        Ok(self.engine.select_piece(pos).is_ok())
    }

    /// Move a piece in one call. Returns True if the board changed.
    fn attempt_move(&mut self, from: (i32, i32), to: (i32, i32)) -> PyResult<bool> {
        let from = to_position(from.0, from.1)?;
        let to = to_position(to.0, to.1)?;
        Ok(self.engine.attempt_move(from, to).applied)
    }

    fn simple_moves(&self, row: i32, col: i32) -> PyResult<Vec<(u8, u8)>> {
        let pos = to_position(row, col)?;
        Ok(to_tuples(self.engine.simple_moves(pos).iter()))
    }

    fn jump_moves(&self, row: i32, col: i32) -> PyResult<Vec<(u8, u8)>> {
        let pos = to_position(row, col)?;
        Ok(to_tuples(self.engine.jump_moves(pos).iter()))
    }

    /// Current highlight targets of the selected piece.
    fn targets(&self) -> Vec<(u8, u8)> {
        let turn = self.engine.turn();
        to_tuples(
            turn.simple_targets()
                .iter()
                .chain(turn.jump_targets())
                .copied(),
        )
    }

    /// Board as an 8x8 int8 array: 0 empty, 1 Player One, 2 Player Two.
    fn board_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let flat: Vec<i8> = self
            .engine
            .board()
            .rows()
            .iter()
            .flatten()
            .map(|cell| match cell.owner() {
                None => 0,
                Some(Player::One) => 1,
                Some(Player::Two) => 2,
            })
            .collect();
        PyArray1::from_slice_bound(py, &flat).reshape([8, 8])
    }

    #[getter]
    fn current_player(&self) -> PyPlayer {
        PyPlayer(self.engine.current_player())
    }

    #[getter]
    fn winner(&self) -> Option<PyPlayer> {
        self.engine.winner().map(PyPlayer)
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    #[getter]
    fn in_jump_chain(&self) -> bool {
        self.engine.turn().in_jump_chain()
    }

    #[getter]
    fn selected(&self) -> Option<(u8, u8)> {
        self.engine.turn().selected().map(<(u8, u8)>::from)
    }

    /// Footer text, e.g. "Red Turn" or "Blue Wins!".
    #[getter]
    fn status(&self) -> String {
        self.engine.status().to_string()
    }

    fn copy(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }

    fn __str__(&self) -> String {
        self.engine.board().to_string()
    }

    fn __repr__(&self) -> String {
        format!("GameEngine(status={:?})", self.engine.status().to_string())
    }
}

fn outcome_name(outcome: ClickOutcome) -> &'static str {
    match outcome {
        ClickOutcome::Selected(_) => "selected",
        ClickOutcome::Deselected => "deselected",
        ClickOutcome::Moved { .. } => "moved",
        ClickOutcome::Jumped {
            chain_continues: true,
            ..
        } => "chain",
        ClickOutcome::Jumped { .. } => "jumped",
        ClickOutcome::TurnEnded { .. } => "turn_ended",
        ClickOutcome::Ignored(_) => "ignored",
    }
}

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}
