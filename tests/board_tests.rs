use battleship_arena::{
    BoardError, Cell, GameEngine, Grid, GuessResult, Orientation, Position, Role, Ship,
    ShipLayout, SHIPS,
};

fn pos(row: usize, col: usize) -> Position {
    Position::from_row_col(row, col).unwrap()
}

#[test]
fn test_is_ship_at_out_of_range_is_false() {
    let mut layout = ShipLayout::new();
    for p in Position::all() {
        layout.occupy(p);
    }
    assert!(layout.is_ship_at(0));
    assert!(layout.is_ship_at(63));
    assert!(!layout.is_ship_at(64));
    assert!(!layout.is_ship_at(1000));
    assert!(!layout.is_ship_at(usize::MAX));
}

#[test]
fn test_position_constructors() {
    assert_eq!(Position::new(63).map(|p| (p.row(), p.col())), Some((7, 7)));
    assert_eq!(Position::new(64), None);
    assert_eq!(Position::from_row_col(8, 0), None);
    assert_eq!(Position::from_row_col(2, 3).map(Position::index), Some(19));
    assert_eq!(pos(2, 3).to_string(), "(2, 3)");
}

#[test]
fn test_attack_on_ship_marks_hit() {
    let mut ships = ShipLayout::new();
    ships.occupy(pos(0, 0));
    let mut board = Grid::new();

    let result = board.mark_attack(&ships, pos(0, 0)).unwrap();
    assert_eq!(result, GuessResult::Hit);
    assert_eq!(result.to_string(), "Hit");
    assert_eq!(board.get(pos(0, 0)), Cell::Hit);

    let result = board.mark_attack(&ships, pos(0, 1)).unwrap();
    assert_eq!(result, GuessResult::Miss);
    assert_eq!(board.get(pos(0, 1)), Cell::Miss);
}

#[test]
fn test_attack_on_marked_cell_is_rejected() {
    let mut ships = ShipLayout::new();
    ships.occupy(pos(3, 3));
    let mut board = Grid::new();
    board.mark_attack(&ships, pos(3, 3)).unwrap();
    board.mark_attack(&ships, pos(4, 4)).unwrap();
    let before = board;

    assert_eq!(
        board.mark_attack(&ships, pos(3, 3)).unwrap_err(),
        BoardError::AlreadyAttacked(pos(3, 3))
    );
    assert_eq!(
        board.mark_attack(&ships, pos(4, 4)).unwrap_err(),
        BoardError::AlreadyAttacked(pos(4, 4))
    );
    assert_eq!(board, before);
}

#[test]
fn test_all_sunk_requires_hits_on_every_ship_cell() {
    let ship = Ship::new(SHIPS[3], Orientation::Horizontal, 2, 2).unwrap();
    let mut ships = ShipLayout::new();
    ships.place(&ship).unwrap();

    let mut board = Grid::new();
    assert!(!board.all_sunk(&ships));
    board.mark_attack(&ships, pos(2, 2)).unwrap();
    assert!(!board.all_sunk(&ships));
    board.mark_attack(&ships, pos(5, 5)).unwrap();
    assert!(!board.all_sunk(&ships));
    board.mark_attack(&ships, pos(2, 3)).unwrap();
    assert!(board.all_sunk(&ships));
}

#[test]
fn test_all_sunk_with_miss_on_ship_cell_is_false() {
    let mut ships = ShipLayout::new();
    ships.occupy(pos(0, 0));
    ships.occupy(pos(0, 1));
    let mut cells = [Cell::Unmarked; 64];
    cells[0] = Cell::Hit;
    cells[1] = Cell::Miss;
    assert!(!Grid::from_cells(cells).all_sunk(&ships));
}

#[test]
fn test_ship_bounds_and_overlap() {
    assert_eq!(
        Ship::new(SHIPS[0], Orientation::Horizontal, 0, 5).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(SHIPS[0], Orientation::Vertical, 5, 0).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    let edge = Ship::new(SHIPS[0], Orientation::Vertical, 4, 7).unwrap();
    assert_eq!(
        edge.cells().collect::<Vec<_>>(),
        vec![pos(4, 7), pos(5, 7), pos(6, 7), pos(7, 7)]
    );

    let mut layout = ShipLayout::new();
    layout.place(&edge).unwrap();
    let crossing = Ship::new(SHIPS[1], Orientation::Horizontal, 5, 5).unwrap();
    assert_eq!(layout.place(&crossing).unwrap_err(), BoardError::ShipOverlaps);
    assert_eq!(layout.occupied_count(), 4);
}

#[test]
fn test_last_hit_wins_the_game() {
    let mut opponent_ships = ShipLayout::new();
    let fleet = [
        Ship::new(SHIPS[0], Orientation::Horizontal, 0, 0).unwrap(),
        Ship::new(SHIPS[1], Orientation::Horizontal, 2, 0).unwrap(),
        Ship::new(SHIPS[2], Orientation::Horizontal, 4, 0).unwrap(),
        Ship::new(SHIPS[3], Orientation::Vertical, 0, 7).unwrap(),
        Ship::new(SHIPS[4], Orientation::Vertical, 6, 7).unwrap(),
    ];
    for ship in &fleet {
        opponent_ships.place(ship).unwrap();
    }
    assert_eq!(opponent_ships.occupied_count(), 14);

    let mut engine = GameEngine::new(Role::Parent, ShipLayout::new(), opponent_ships);
    let cells: Vec<Position> = opponent_ships.occupied().collect();
    let (last, rest) = cells.split_last().unwrap();
    for &p in rest {
        assert_eq!(engine.attack(p).unwrap(), GuessResult::Hit);
        assert!(!engine.has_won());
    }
    assert_eq!(engine.opponent_board().hit_count(), 13);

    assert_eq!(engine.attack(*last).unwrap(), GuessResult::Hit);
    assert!(engine.has_won());
    assert_eq!(engine.attack_count(), 14);
}

#[test]
fn test_incoming_attacks_mark_own_board() {
    let mut ships = ShipLayout::new();
    ships.occupy(pos(1, 1));
    let mut engine = GameEngine::new(Role::Child, ships, ShipLayout::new());

    assert_eq!(engine.record_incoming(pos(1, 1)).unwrap(), GuessResult::Hit);
    assert!(engine.has_lost());
    assert_eq!(engine.board().get(pos(1, 1)), Cell::Hit);
    assert!(engine.record_incoming(pos(1, 1)).is_err());
}
