//! Core battleship model (no_std compatible)
//!
//! Grids, fleets, random placement and target selection. Nothing here knows
//! about turns, tasks or files.

pub mod attack;
pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod placement;
pub mod ship;

pub use attack::choose_attack;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::Grid;
pub use common::{BoardError, Cell, GuessResult, Position};
pub use config::*;
pub use placement::auto_place;
pub use ship::{Orientation, Ship, ShipLayout, ShipType};
