use battleship_arena::{
    choose_attack, AiPlayer, Cell, GameEngine, Grid, Move, Player, Position, Role, ShipLayout,
    GRID_CELLS,
};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_choose_attack_none_when_grid_full() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = Grid::from_cells([Cell::Miss; GRID_CELLS]);
    assert_eq!(choose_attack(&mut rng, &grid), None);
}

#[test]
fn test_choose_attack_finds_last_unmarked_cell() {
    let mut cells = [Cell::Hit; GRID_CELLS];
    cells[42] = Cell::Unmarked;
    let grid = Grid::from_cells(cells);
    for seed in 0..16 {
        let mut rng = SmallRng::seed_from_u64(seed);
        assert_eq!(choose_attack(&mut rng, &grid), Position::new(42));
    }
}

#[test]
fn test_choose_attack_same_seed_same_choice() {
    let grid = Grid::new();
    let a = choose_attack(&mut SmallRng::seed_from_u64(99), &grid);
    let b = choose_attack(&mut SmallRng::seed_from_u64(99), &grid);
    assert_eq!(a, b);
}

#[test]
fn test_ai_player_covers_board_without_repeats() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut ai = AiPlayer::new();
    let mut engine = GameEngine::new(Role::Parent, ShipLayout::new(), ShipLayout::new());

    for _ in 0..GRID_CELLS {
        let Move::Attack(pos) = ai.next_move(&mut rng, &engine.view()).unwrap() else {
            panic!("AI should always attack");
        };
        engine.attack(pos).unwrap();
    }
    assert_eq!(engine.attack_count(), GRID_CELLS);
    assert!(ai.next_move(&mut rng, &engine.view()).is_err());
}
