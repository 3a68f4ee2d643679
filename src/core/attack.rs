// Target selection for the automated participant: uniform over unmarked
// cells, no hunting strategy.

use rand::Rng;

use super::board::Grid;
use super::common::Position;
use super::config::GRID_CELLS;

/// Draw a uniformly random position in `[0, 64)`, redrawing while the cell
/// is already marked on `opponent_board`.
///
/// Returns `None` when no unmarked cell is left, so the redraw loop always
/// terminates.
pub fn choose_attack<R: Rng>(rng: &mut R, opponent_board: &Grid) -> Option<Position> {
    if opponent_board.unmarked_count() == 0 {
        return None;
    }
    loop {
        let pos = Position::new(rng.random_range(0..GRID_CELLS))?;
        if !opponent_board.is_marked(pos) {
            return Some(pos);
        }
    }
}
