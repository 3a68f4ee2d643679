use super::bitboard::BitBoard;
use super::ship::ShipType;

pub const BOARD_SIZE: u8 = 8;
pub const GRID_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
    ShipType::new("Patrol Boat", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2;

/// Occupancy bitboard sized for the game grid.
pub type BB = BitBoard<u64, { BOARD_SIZE as usize }>;

