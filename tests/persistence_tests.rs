use std::path::PathBuf;

use battleship_arena::{
    auto_place,
    persistence::{read_snapshot, write_board_dump, write_snapshot},
    Cell, GameSnapshot, Grid, LoadError, Position, Role, SaveFiles, ShipLayout, TurnState,
    GRID_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "battleship-arena-persist-{}-{}",
        std::process::id(),
        name
    ))
}

fn random_snapshot(seed: u64) -> GameSnapshot {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut ships = ShipLayout::new();
    let mut opponent_ships = ShipLayout::new();
    auto_place(&mut rng, &mut ships);
    auto_place(&mut rng, &mut opponent_ships);
    let player = if rng.random() { Role::Parent } else { Role::Child };
    let mut snapshot = GameSnapshot::new(player, ships, opponent_ships);
    snapshot.turn = TurnState::for_role(player);
    snapshot.data = rng.random();
    for _ in 0..rng.random_range(0..40) {
        let pos = Position::new(rng.random_range(0..GRID_CELLS)).unwrap();
        let _ = snapshot.board.mark_attack(&ships, pos);
        let pos = Position::new(rng.random_range(0..GRID_CELLS)).unwrap();
        let _ = snapshot.opponent_board.mark_attack(&opponent_ships, pos);
    }
    snapshot
}

fn to_text(snapshot: &GameSnapshot) -> String {
    let mut buf = Vec::new();
    write_snapshot(&mut buf, snapshot).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_save_format_layout() {
    let mut ships = ShipLayout::new();
    ships.occupy(Position::new(0).unwrap());
    let mut snapshot = GameSnapshot::new(Role::Parent, ships, ShipLayout::new());
    snapshot.board.mark_attack(&ships, Position::new(0).unwrap()).unwrap();
    snapshot.board.mark_attack(&ships, Position::new(1).unwrap()).unwrap();

    let text = to_text(&snapshot);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "1 0 1");
    for line in &lines[1..] {
        assert_eq!(line.split_whitespace().count(), GRID_CELLS);
    }
    assert!(lines[1].starts_with("1 2 0 0"));
    assert!(lines[2].split_whitespace().all(|v| v == "0"));
    assert!(lines[3].starts_with("1 0 0"));
}

#[test]
fn test_terminal_and_child_codes_are_written() {
    let mut snapshot = GameSnapshot::new(Role::Child, ShipLayout::new(), ShipLayout::new());
    snapshot.turn = TurnState::ReturnToMenu;
    assert!(to_text(&snapshot).starts_with("-2 0 0\n"));
    snapshot.turn = TurnState::GameOver;
    assert!(to_text(&snapshot).starts_with("-1 0 0\n"));
}

#[test]
fn test_save_and_load_through_files() {
    let files = SaveFiles::new(temp_path("state.txt"), temp_path("dump.txt"));
    let snapshot = random_snapshot(21);

    files.save_state(&snapshot).unwrap();
    assert_eq!(files.load_state().unwrap(), snapshot);
    assert_eq!(files.try_save_state(&snapshot), Some(files.save_path()));

    let _ = std::fs::remove_file(files.save_path());
}

#[test]
fn test_missing_save_is_not_found() {
    let files = SaveFiles::new(temp_path("does-not-exist.txt"), temp_path("unused.txt"));
    let _ = std::fs::remove_file(files.save_path());
    assert!(matches!(files.load_state(), Err(LoadError::NotFound)));
}

#[test]
fn test_unwritable_location_is_reported() {
    let dir = temp_path("missing-dir");
    let _ = std::fs::remove_dir_all(&dir);
    let files = SaveFiles::new(dir.join("state.txt"), dir.join("dump.txt"));
    let snapshot = random_snapshot(3);
    assert!(files.save_state(&snapshot).is_err());
    assert_eq!(files.try_save_state(&snapshot), None);
    assert_eq!(files.try_dump_boards(&snapshot), None);
}

#[test]
fn test_truncated_save_is_malformed() {
    assert!(matches!(
        read_snapshot("1 0 1\n0 0"),
        Err(LoadError::Malformed { field: "board", index: 5 })
    ));
    assert!(matches!(
        read_snapshot(""),
        Err(LoadError::Malformed { field: "turn", index: 0 })
    ));
}

#[test]
fn test_out_of_range_values_are_malformed() {
    let good = to_text(&random_snapshot(8));

    let bad_turn = good.replacen(good.split_whitespace().next().unwrap(), "7", 1);
    assert!(matches!(
        read_snapshot(&bad_turn),
        Err(LoadError::Malformed { field: "turn", .. })
    ));

    let mut tokens: Vec<String> = good.split_whitespace().map(str::to_string).collect();
    tokens[2] = "5".to_string();
    assert!(matches!(
        read_snapshot(&tokens.join(" ")),
        Err(LoadError::Malformed { field: "player", index: 2 })
    ));

    tokens[2] = "1".to_string();
    tokens[3 + 64] = "3".to_string();
    assert!(matches!(
        read_snapshot(&tokens.join(" ")),
        Err(LoadError::Malformed { field: "opponent board", index: 67 })
    ));

    tokens[3 + 64] = "0".to_string();
    tokens[3 + 128] = "x".to_string();
    assert!(matches!(
        read_snapshot(&tokens.join(" ")),
        Err(LoadError::Malformed { field: "ships", index: 131 })
    ));
}

#[test]
fn test_trailing_content_is_ignored() {
    let snapshot = random_snapshot(30);
    let text = format!("{}junk 1 2 3\n", to_text(&snapshot));
    assert_eq!(read_snapshot(&text).unwrap(), snapshot);
}

#[test]
fn test_board_dump_format() {
    let mut ships = ShipLayout::new();
    ships.occupy(Position::from_row_col(0, 1).unwrap());
    let mut snapshot = GameSnapshot::new(Role::Parent, ships, ShipLayout::new());
    let mut cells = [Cell::Unmarked; GRID_CELLS];
    cells[GRID_CELLS - 1] = Cell::Miss;
    snapshot.opponent_board = Grid::from_cells(cells);

    let mut buf = Vec::new();
    write_board_dump(&mut buf, &snapshot).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4 * 9 + 3);
    assert_eq!(lines[0], "Player's Board:");
    assert_eq!(lines[1], "0 0 0 0 0 0 0 0");
    assert_eq!(lines[9], "");
    assert_eq!(lines[10], "Player's Ships:");
    assert_eq!(lines[11], "0 1 0 0 0 0 0 0");
    assert_eq!(lines[20], "Opponent's Board:");
    assert_eq!(lines[28], "0 0 0 0 0 0 0 2");
    assert_eq!(lines[30], "Opponent's Ships:");
}

#[test]
fn test_dump_through_files() {
    let files = SaveFiles::new(temp_path("unused-state.txt"), temp_path("boards.txt"));
    let snapshot = random_snapshot(4);
    assert_eq!(files.try_dump_boards(&snapshot), Some(files.dump_path()));
    let text = std::fs::read_to_string(files.dump_path()).unwrap();
    assert!(text.contains("Opponent's Ships:"));
    let _ = std::fs::remove_file(files.dump_path());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn save_text_reloads_to_same_snapshot(seed in any::<u64>()) {
        let snapshot = random_snapshot(seed);
        prop_assert_eq!(read_snapshot(&to_text(&snapshot)).unwrap(), snapshot);
    }
}
