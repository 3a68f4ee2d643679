use battleship_arena::{
    menu::{parse_choice, render_menu, MenuChoice},
    player::parse_command,
    ui::{render_boards, render_grid},
    Grid, Move, Position, ShipLayout,
};

#[test]
fn test_parse_command_coordinates() {
    assert_eq!(
        parse_command("3 4\n"),
        Ok(Move::Attack(Position::from_row_col(3, 4).unwrap()))
    );
    assert_eq!(
        parse_command("  0   7 "),
        Ok(Move::Attack(Position::from_row_col(0, 7).unwrap()))
    );
    assert!(parse_command("8 0").is_err());
    assert!(parse_command("0 -1").is_err());
    assert!(parse_command("1").is_err());
    assert!(parse_command("1 2 3").is_err());
    assert!(parse_command("a b").is_err());
    assert!(parse_command("").is_err());
    assert!(parse_command("   \n").is_err());
}

#[test]
fn test_parse_command_pause_and_menu() {
    assert_eq!(parse_command("p"), Ok(Move::Pause));
    assert_eq!(parse_command("P\n"), Ok(Move::Pause));
    assert_eq!(parse_command("pause"), Ok(Move::Pause));
    assert_eq!(parse_command("m"), Ok(Move::ReturnToMenu));
    assert_eq!(parse_command(" M "), Ok(Move::ReturnToMenu));
}

#[test]
fn test_menu_numbering_depends_on_game() {
    let with_game = render_menu(true);
    assert!(with_game.contains("3. Continue Game"));
    assert!(with_game.contains("6. Exit"));
    assert!(with_game.ends_with("Enter your choice (1-6): "));

    let without_game = render_menu(false);
    assert!(!without_game.contains("Continue Game"));
    assert!(without_game.contains("3. Display Grids"));
    assert!(without_game.ends_with("Enter your choice (1-5): "));

    assert_eq!(parse_choice("3\n", true), Some(MenuChoice::Continue));
    assert_eq!(parse_choice("3\n", false), Some(MenuChoice::DisplayGrids));
    assert_eq!(parse_choice("5", false), Some(MenuChoice::Exit));
    assert_eq!(parse_choice("6", true), Some(MenuChoice::Exit));
    assert_eq!(parse_choice("6", false), None);
    assert_eq!(parse_choice("0", true), None);
    assert_eq!(parse_choice("one", true), None);
}

#[test]
fn test_render_grid_symbols() {
    let mut ships = ShipLayout::new();
    ships.occupy(Position::new(0).unwrap());
    ships.occupy(Position::new(1).unwrap());
    let mut grid = Grid::new();
    grid.mark_attack(&ships, Position::new(0).unwrap()).unwrap();
    grid.mark_attack(&ships, Position::new(2).unwrap()).unwrap();

    let text = render_grid(&grid, Some(&ships));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "    0 1 2 3 4 5 6 7");
    assert_eq!(lines[1], "0   X S O . . . . .");

    let hidden = render_grid(&grid, None);
    assert!(hidden.lines().nth(1).unwrap().starts_with("0   X . O"));

    let both = render_boards(&grid, &ships, &Grid::new());
    assert!(both.starts_with("Your Board:\n"));
    assert!(both.contains("\nOpponent's Board:\n"));
}
