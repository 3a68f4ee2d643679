#![cfg(feature = "std")]

//! Numbered main menu. The numbering depends on whether an interrupted game
//! can be continued.

/// A main menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    LoadGame,
    Continue,
    DisplayGrids,
    RelocateShips,
    Exit,
}

const WITH_GAME: [(MenuChoice, &str); 6] = [
    (MenuChoice::NewGame, "Start New Game"),
    (MenuChoice::LoadGame, "Load Game from File"),
    (MenuChoice::Continue, "Continue Game"),
    (MenuChoice::DisplayGrids, "Display Grids"),
    (MenuChoice::RelocateShips, "Re-locate Ships"),
    (MenuChoice::Exit, "Exit"),
];

const WITHOUT_GAME: [(MenuChoice, &str); 5] = [
    (MenuChoice::NewGame, "Start New Game"),
    (MenuChoice::LoadGame, "Load Game from File"),
    (MenuChoice::DisplayGrids, "Display Grids"),
    (MenuChoice::RelocateShips, "Re-locate Ships"),
    (MenuChoice::Exit, "Exit"),
];

fn entries(game_in_progress: bool) -> &'static [(MenuChoice, &'static str)] {
    if game_in_progress {
        &WITH_GAME
    } else {
        &WITHOUT_GAME
    }
}

/// Menu text including the input prompt.
pub fn render_menu(game_in_progress: bool) -> String {
    let entries = entries(game_in_progress);
    let mut out = String::from("\nBattleship Game Menu:\n");
    for (i, (_, label)) in entries.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, label));
    }
    out.push_str(&format!("Enter your choice (1-{}): ", entries.len()));
    out
}

/// Map a typed option number to its action, or `None` for anything that is
/// not a listed number.
pub fn parse_choice(input: &str, game_in_progress: bool) -> Option<MenuChoice> {
    let n: usize = input.trim().parse().ok()?;
    entries(game_in_progress)
        .get(n.checked_sub(1)?)
        .map(|(choice, _)| *choice)
}
