//! The 8x8 board and its home zones.
//!
//! ## Layout text
//!
//! Boards parse from and render to eight lines of eight cells:
//!
//! ```text
//! 111.....
//! 111.....
//! 111.....
//! ........
//! ........
//! .....222
//! .....222
//! .....222
//! ```
//!
//! `.` is empty, `1` (or `R`) is Player One, `2` (or `B`) is Player Two.
//! Whitespace inside a row and blank lines are ignored, so indented raw
//! strings work in tests.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::player::Player;
use super::position::{Position, BOARD_SIZE};

/// Pieces each player owns for the whole game.
pub const PIECES_PER_PLAYER: usize = 9;

const SIZE: usize = BOARD_SIZE as usize;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// The owner of the piece in this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::One) => '1',
            Cell::Occupied(Player::Two) => '2',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Cell::Empty),
            '1' | 'R' | 'r' => Some(Cell::Occupied(Player::One)),
            '2' | 'B' | 'b' => Some(Cell::Occupied(Player::Two)),
            _ => None,
        }
    }
}

/// A 3x3 corner block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    top: u8,
    left: u8,
}

impl Zone {
    /// The block a player starts in.
    #[must_use]
    pub const fn home(player: Player) -> Self {
        match player {
            Player::One => Zone { top: 0, left: 0 },
            Player::Two => Zone { top: 5, left: 5 },
        }
    }

    /// The block a player must fill to win: the opponent's home.
    #[must_use]
    pub const fn target(player: Player) -> Self {
        Self::home(player.opponent())
    }

    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        (self.top..self.top + 3).contains(&pos.row()) && (self.left..self.left + 3).contains(&pos.col())
    }

    /// The nine cells of the block in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        (self.top..self.top + 3)
            .flat_map(move |row| (self.left..self.left + 3).map(move |col| Position::new(row, col)))
    }
}

/// The game board.
///
/// Plain `Copy` data: 64 cells. Only the rules module mutates it; everyone
/// else reads through `&Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// A board with no pieces.
    ///
    /// Not a legal game position on its own; use it to build scenarios and
    /// run [`Board::validate`] before playing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// The starting position: each player fills their home zone.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for player in Player::ALL {
            for pos in Zone::home(player).cells() {
                board.set(pos, Cell::Occupied(player));
            }
        }
        board
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Overwrite a cell. Does not check the piece-count invariant.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = cell;
    }

    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    #[must_use]
    pub fn owner(&self, pos: Position) -> Option<Player> {
        self.get(pos).owner()
    }

    /// Move whatever is at `from` to `to`, leaving `from` empty.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) {
        let cell = self.get(from);
        self.set(to, cell);
        self.set(from, Cell::Empty);
    }

    /// A player's piece positions in row-major order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.owner(pos) == Some(player))
    }

    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.pieces(player).count()
    }

    /// True if every one of the player's pieces sits in their target zone.
    ///
    /// Vacuously true for a player with no pieces, which a validated board
    /// never has.
    #[must_use]
    pub fn all_in_target(&self, player: Player) -> bool {
        let target = Zone::target(player);
        self.pieces(player).all(|pos| target.contains(pos))
    }

    /// Check the piece-count invariant.
    pub fn validate(&self) -> Result<(), BoardError> {
        for player in Player::ALL {
            let found = self.count(player);
            if found != PIECES_PER_PLAYER {
                return Err(BoardError::PieceCount { player, found });
            }
        }
        Ok(())
    }

    /// Rows as plain arrays, for renderers.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse layout text. Piece counts are not checked here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != SIZE {
            return Err(BoardError::RowCount { found: rows.len() });
        }

        let mut board = Self::empty();
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != SIZE {
                return Err(BoardError::RowLength {
                    row,
                    found: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell = Cell::from_symbol(ch).ok_or(BoardError::UnknownCell { row, ch })?;
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
