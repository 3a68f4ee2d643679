#![cfg(feature = "std")]

use std::fmt::Write;

use crate::core::{Cell, Grid, Position, ShipLayout, BOARD_SIZE};

/// Render `grid` as text, one row per line, with row and column numbers.
///
/// `X` marks a hit, `O` a miss and `.` an unmarked cell. When `ships` is
/// given, unmarked ship cells are drawn as `S`.
pub fn render_grid(grid: &Grid, ships: Option<&ShipLayout>) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for col in 0..BOARD_SIZE as usize {
        let _ = write!(out, " {}", col);
    }
    out.push('\n');
    for row in 0..BOARD_SIZE as usize {
        let _ = write!(out, "{}  ", row);
        for col in 0..BOARD_SIZE as usize {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            let symbol = match grid.get(pos) {
                Cell::Hit => 'X',
                Cell::Miss => 'O',
                Cell::Unmarked if ships.is_some_and(|s| s.contains(pos)) => 'S',
                Cell::Unmarked => '.',
            };
            let _ = write!(out, " {}", symbol);
        }
        out.push('\n');
    }
    out
}

/// Own board with ships revealed, followed by the attacks made so far.
pub fn render_boards(board: &Grid, ships: &ShipLayout, opponent_board: &Grid) -> String {
    let mut out = String::from("Your Board:\n");
    out.push_str(&render_grid(board, Some(ships)));
    out.push_str("\nOpponent's Board:\n");
    out.push_str(&render_grid(opponent_board, None));
    out
}
