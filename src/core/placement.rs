//! Random fleet placement.

use rand::Rng;

use super::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use super::ship::{Orientation, Ship, ShipLayout};

/// Clear `layout` and place the full fleet at random.
///
/// For each ship, an orientation and an anchor cell anywhere on the grid are
/// drawn uniformly; candidates that leave the grid or overlap an earlier ship
/// are discarded and drawn again. There is no attempt cap: with five ships
/// covering 14 of 64 cells a fit is always reachable. Returns the committed
/// placements in fleet order.
pub fn auto_place<R: Rng>(rng: &mut R, layout: &mut ShipLayout) -> [Ship; NUM_SHIPS] {
    layout.clear();
    let n = BOARD_SIZE as usize;
    core::array::from_fn(|i| {
        let def = SHIPS[i];
        loop {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..n);
            let col = rng.random_range(0..n);
            let Ok(ship) = Ship::new(def, orientation, row, col) else {
                continue;
            };
            if layout.place(&ship).is_ok() {
                return ship;
            }
        }
    })
}
