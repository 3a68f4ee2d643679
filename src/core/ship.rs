//! Ship definitions, placements and the occupancy layout of a fleet.

use core::fmt;

use super::common::{BoardError, Position};
use super::config::{BB, BOARD_SIZE};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship anchored at (`row`, `col`), extending right or down.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BB,
}

impl Ship {
    /// Place a ship at (`row`, `col`) with `orientation`. Fails with
    /// `ShipOutOfBounds` if any segment would leave the grid.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let n = BOARD_SIZE as usize;
        let len = ship_type.length();
        let fits = match orientation {
            Orientation::Horizontal => row < n && col + len <= n,
            Orientation::Vertical => col < n && row + len <= n,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut mask = BB::new();
        for i in 0..len {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
            mask.set(r * n + c)?;
        }

        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
            mask,
        })
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Cells covered by the ship, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        self.mask.iter_set_bits().filter_map(Position::new)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?} }}",
            self.ship_type.name(),
            self.row,
            self.col,
            self.orientation,
        )
    }
}

/// Which grid cells hold a ship segment.
///
/// The layout only records occupancy; which segment belongs to which ship is
/// not kept, matching what the save file stores.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipLayout {
    occupied: BB,
}

impl ShipLayout {
    /// An empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a ship occupies the row-major `position`. Out-of-range
    /// positions are never occupied.
    pub fn is_ship_at(&self, position: usize) -> bool {
        self.occupied.get(position).unwrap_or(false)
    }

    /// Whether a ship occupies `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.is_ship_at(pos.index())
    }

    /// Whether `ship` fits without touching an occupied cell.
    pub fn can_place(&self, ship: &Ship) -> bool {
        (self.occupied & ship.mask()).is_empty()
    }

    /// Commit `ship` to the layout.
    pub fn place(&mut self, ship: &Ship) -> Result<(), BoardError> {
        if !self.can_place(ship) {
            return Err(BoardError::ShipOverlaps);
        }
        self.occupied = self.occupied | ship.mask();
        Ok(())
    }

    /// Mark a single cell as occupied.
    pub fn occupy(&mut self, pos: Position) {
        // Position is always in range.
        let _ = self.occupied.set(pos.index());
    }

    /// Remove every ship.
    pub fn clear(&mut self) {
        self.occupied.clear_all();
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.count_ones()
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = Position> {
        self.occupied.iter_set_bits().filter_map(Position::new)
    }

    /// Raw occupancy mask.
    pub fn mask(&self) -> BB {
        self.occupied
    }
}

impl fmt::Debug for ShipLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ShipLayout {{")?;
        writeln!(f, "{}", self.occupied)?;
        write!(f, "}}")
    }
}
