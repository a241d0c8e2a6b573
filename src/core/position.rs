//! Board coordinates and orthogonal directions.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 8;

/// A cell on the 8x8 board.
///
/// Row 0 is the top row, column 0 the leftmost column. Both coordinates are
/// always in `0..BOARD_SIZE`; the constructors enforce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is off the board. Use [`Position::checked`]
    /// for untrusted input.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "Position off the board");
        Self { row, col }
    }

    /// Create a position from signed coordinates, `None` if off the board.
    #[must_use]
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        let size = i32::from(BOARD_SIZE);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index (0 = top).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0 = left).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Move `distance` cells in `direction`, `None` if that leaves the board.
    #[must_use]
    pub fn step(self, direction: Direction, distance: i32) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Self::checked(
            i32::from(self.row) + dr * distance,
            i32::from(self.col) + dc * distance,
        )
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn distance(self, other: Position) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// All 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

/// The four orthogonal directions. There is no diagonal movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Directions in evaluation order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `(row, col)` offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}
