//! Common types for the grid: positions, cell marks, attack results and
//! board errors.

use core::fmt;

use super::bitboard::BitBoardError;
use super::config::{BOARD_SIZE, GRID_CELLS};

const WIDTH: usize = BOARD_SIZE as usize;

/// A cell on the 8×8 grid, stored as the row-major index `row * 8 + col`.
///
/// Values can only be built through the checked constructors, so every
/// `Position` is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// Position for a row-major index, or `None` outside `[0, 64)`.
    pub const fn new(index: usize) -> Option<Self> {
        if index < GRID_CELLS {
            Some(Position(index as u8))
        } else {
            None
        }
    }

    /// Position for `(row, col)`, or `None` if either is outside `[0, 8)`.
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < WIDTH && col < WIDTH {
            Some(Position((row * WIDTH + col) as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn row(self) -> usize {
        self.0 as usize / WIDTH
    }

    pub const fn col(self) -> usize {
        self.0 as usize % WIDTH
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_CELLS as u8).map(Position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// Mark state of one grid cell. The discriminants are the save file codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Unmarked = 0,
    Hit = 1,
    Miss = 2,
}

impl Cell {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Cell::Unmarked),
            1 => Some(Cell::Hit),
            2 => Some(Cell::Miss),
            _ => None,
        }
    }

    pub const fn is_marked(self) -> bool {
        !matches!(self, Cell::Unmarked)
    }
}

/// Result of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// The attack landed on a ship cell.
    Hit,
    /// The attack landed on open water.
    Miss,
}

impl GuessResult {
    pub const fn cell(self) -> Cell {
        match self {
            GuessResult::Hit => Cell::Hit,
            GuessResult::Miss => Cell::Miss,
        }
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessResult::Hit => write!(f, "Hit"),
            GuessResult::Miss => write!(f, "Miss"),
        }
    }
}

/// Errors returned by board and ship operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Cell was already attacked.
    AlreadyAttacked(Position),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement leaves the grid.
    ShipOutOfBounds,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::AlreadyAttacked(pos) => {
                write!(f, "Position {} was already attacked", pos)
            }
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
