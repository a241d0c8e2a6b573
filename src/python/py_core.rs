//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Player, Position};

/// Python wrapper for Player.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    /// Create a player from its number (1 or 2).
    #[new]
    fn new(number: u8) -> PyResult<Self> {
        to_player(number).map(Self)
    }

    /// Player number (1 or 2).
    #[getter]
    fn number(&self) -> u8 {
        self.0.index() as u8 + 1
    }

    /// Colour name ("Red" or "Blue").
    #[getter]
    fn color(&self) -> &'static str {
        self.0.color_name()
    }

    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("Player({})", self.number())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Python wrapper for Position.
#[pyclass(name = "Position")]
#[derive(Clone, Debug)]
pub struct PyPosition(pub Position);

#[pymethods]
impl PyPosition {
    #[new]
    fn new(row: i32, col: i32) -> PyResult<Self> {
        to_position(row, col).map(Self)
    }

    #[getter]
    fn row(&self) -> u8 {
        self.0.row()
    }

    #[getter]
    fn col(&self) -> u8 {
        self.0.col()
    }

    fn __repr__(&self) -> String {
        format!("Position({}, {})", self.0.row(), self.0.col())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.row()) * 8 + u64::from(self.0.col())
    }
}

/// Convert a player number, raising ValueError unless it is 1 or 2.
pub(crate) fn to_player(number: u8) -> PyResult<Player> {
    match number {
        1 => Ok(Player::One),
        2 => Ok(Player::Two),
        _ => Err(PyValueError::new_err(format!(
            "player number must be 1 or 2, got {}",
            number
        ))),
    }
}

/// Convert Python coordinates, raising ValueError off the board.
pub(crate) fn to_position(row: i32, col: i32) -> PyResult<Position> {
    Position::checked(row, col)
        .ok_or_else(|| PyValueError::new_err(format!("({}, {}) is off the board", row, col)))
}

/// Positions as `(row, col)` tuples.
pub(crate) fn to_tuples(positions: impl IntoIterator<Item = Position>) -> Vec<(u8, u8)> {
    positions.into_iter().map(<(u8, u8)>::from).collect()
}
