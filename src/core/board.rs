//! Attack grids: one participant's record of marked cells.

use core::fmt;

use super::common::{BoardError, Cell, GuessResult, Position};
use super::config::{BOARD_SIZE, GRID_CELLS};
use super::ship::ShipLayout;

/// A fixed 8×8 grid of [`Cell`] marks.
///
/// Each participant keeps two of them: its `board` (attacks received against
/// its own fleet) and its `opponent_board` (attacks it made against the
/// rival).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// A grid with every cell unmarked.
    pub fn new() -> Self {
        Grid {
            cells: [Cell::Unmarked; GRID_CELLS],
        }
    }

    /// Build a grid from row-major cells.
    pub fn from_cells(cells: [Cell; GRID_CELLS]) -> Self {
        Grid { cells }
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn is_marked(&self, pos: Position) -> bool {
        self.get(pos).is_marked()
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell; GRID_CELLS] {
        &self.cells
    }

    /// Resolve an attack at `pos` against `ships`: the cell becomes `Hit`
    /// when a ship occupies it and `Miss` otherwise. A cell that is already
    /// marked is left untouched and reported as `AlreadyAttacked`.
    pub fn mark_attack(
        &mut self,
        ships: &ShipLayout,
        pos: Position,
    ) -> Result<GuessResult, BoardError> {
        if self.is_marked(pos) {
            return Err(BoardError::AlreadyAttacked(pos));
        }
        let result = if ships.contains(pos) {
            GuessResult::Hit
        } else {
            GuessResult::Miss
        };
        self.cells[pos.index()] = result.cell();
        Ok(result)
    }

    /// `true` iff every occupied cell of `ships` is marked `Hit` here.
    pub fn all_sunk(&self, ships: &ShipLayout) -> bool {
        ships.occupied().all(|pos| self.get(pos) == Cell::Hit)
    }

    pub fn unmarked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_marked()).count()
    }

    /// Number of attacks recorded on this grid.
    pub fn marked_count(&self) -> usize {
        GRID_CELLS - self.unmarked_count()
    }

    pub fn hit_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Hit).count()
    }

    /// Reset every cell to `Unmarked`.
    pub fn clear(&mut self) {
        self.cells = [Cell::Unmarked; GRID_CELLS];
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = BOARD_SIZE as usize;
        writeln!(f, "Grid {{")?;
        for row in self.cells.chunks(width) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.code())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
