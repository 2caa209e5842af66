use seabattle::{Board, BoardError, CellState, Coordinate, Orientation, Ship, ShotOutcome};

fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn board_with_three_deck() -> Board {
    let mut board = Board::new(6).unwrap();
    board
        .add_ship(Ship::new(c(0, 0), 3, Orientation::Vertical))
        .unwrap();
    board.reset_targeting_memory();
    board
}

#[test]
fn test_add_ship_marks_cells() {
    let board = board_with_three_deck();
    for r in 0..3 {
        assert_eq!(board.cell(c(r, 0)), Some(CellState::Ship));
        assert!(board.is_reserved(c(r, 0)));
    }
    // buffer reserved but not revealed
    assert!(board.is_reserved(c(3, 1)));
    assert_eq!(board.cell(c(3, 1)), Some(CellState::Empty));
    assert!(!board.is_reserved(c(4, 0)));
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_diagonal_neighbour_rejected() {
    let mut board = board_with_three_deck();
    assert_eq!(
        board.add_ship(Ship::new(c(1, 1), 1, Orientation::Vertical)),
        Err(BoardError::InvalidPlacement)
    );
    assert_eq!(
        board.add_ship(Ship::new(c(3, 1), 1, Orientation::Vertical)),
        Err(BoardError::InvalidPlacement)
    );
    // two columns away is fine
    board
        .add_ship(Ship::new(c(0, 2), 2, Orientation::Vertical))
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let mut board = Board::new(6).unwrap();
    for ship in [
        Ship::new(c(4, 0), 3, Orientation::Vertical),
        Ship::new(c(0, 5), 2, Orientation::Horizontal),
        Ship::new(c(6, 6), 1, Orientation::Vertical),
        Ship::new(c(-1, 0), 1, Orientation::Vertical),
        Ship::new(c(0, 0), 0, Orientation::Vertical),
    ] {
        assert_eq!(board.add_ship(ship), Err(BoardError::InvalidPlacement));
    }
    assert!(board.ships().is_empty());
    assert!(board.cell(c(4, 0)) == Some(CellState::Empty));
}

#[test]
fn test_hit_hit_sunk() {
    let mut board = board_with_three_deck();
    assert_eq!(board.shot(c(0, 0)).unwrap(), ShotOutcome::Hit);
    assert!(!board.is_defeated());
    assert_eq!(board.shot(c(1, 0)).unwrap(), ShotOutcome::Hit);
    assert!(!board.is_defeated());
    assert_eq!(board.shot(c(2, 0)).unwrap(), ShotOutcome::Sunk);
    assert!(board.is_defeated());
    assert_eq!(board.destroyed_count(), 1);
    assert_eq!(board.remaining_ships(), 0);
    for r in 0..3 {
        assert_eq!(board.cell(c(r, 0)), Some(CellState::Hit));
    }
}

#[test]
fn test_repeat_shot_rejected() {
    let mut board = board_with_three_deck();
    assert_eq!(board.shot(c(0, 0)).unwrap(), ShotOutcome::Hit);
    let destroyed = board.destroyed_count();
    assert_eq!(
        board.shot(c(0, 0)).unwrap_err(),
        BoardError::AlreadyTargeted(c(0, 0))
    );
    assert_eq!(board.destroyed_count(), destroyed);

    assert_eq!(board.shot(c(5, 5)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell(c(5, 5)), Some(CellState::Miss));
    assert_eq!(
        board.shot(c(5, 5)).unwrap_err(),
        BoardError::AlreadyTargeted(c(5, 5))
    );
}

#[test]
fn test_out_of_bounds_shot_leaves_board_untouched() {
    let mut board = board_with_three_deck();
    for target in [c(-1, 0), c(0, 6), c(6, 0), c(7, 7)] {
        assert_eq!(
            board.shot(target).unwrap_err(),
            BoardError::OutOfBounds(target)
        );
    }
    assert_eq!(board.untargeted_cells().count(), 36);
}

#[test]
fn test_reset_targeting_memory_keeps_placement() {
    let mut board = board_with_three_deck();
    board.shot(c(4, 4)).unwrap();
    assert!(board.is_targeted(c(4, 4)));
    board.reset_targeting_memory();
    assert!(!board.is_targeted(c(4, 4)));
    // placement buffer survives, so no ship can be squeezed in next to the first
    assert_eq!(
        board.add_ship(Ship::new(c(0, 1), 1, Orientation::Vertical)),
        Err(BoardError::InvalidPlacement)
    );
    // and a fresh board accepts shots at ship cells
    assert_eq!(board.shot(c(0, 0)).unwrap(), ShotOutcome::Hit);
}

#[test]
fn test_sink_reveals_ring() {
    let mut board = board_with_three_deck();
    for r in 0..3 {
        board.shot(c(r, 0)).unwrap();
    }
    let ring = [c(0, 1), c(1, 1), c(2, 1), c(3, 0), c(3, 1)];
    for cell in ring {
        assert_eq!(board.cell(cell), Some(CellState::Cleared), "{:?}", cell);
        assert_eq!(
            board.shot(cell).unwrap_err(),
            BoardError::AlreadyTargeted(cell)
        );
    }
    assert_eq!(board.cell(c(4, 0)), Some(CellState::Empty));
    assert_eq!(board.cell(c(0, 2)), Some(CellState::Empty));
    assert_eq!(board.untargeted_cells().count(), 36 - 3 - ring.len());
}

#[test]
fn test_sink_keeps_earlier_miss_marks() {
    let mut board = board_with_three_deck();
    assert_eq!(board.shot(c(3, 0)).unwrap(), ShotOutcome::Miss);
    for r in 0..3 {
        board.shot(c(r, 0)).unwrap();
    }
    assert_eq!(board.cell(c(3, 0)), Some(CellState::Miss));
    assert_eq!(board.cell(c(3, 1)), Some(CellState::Cleared));
}

#[test]
fn test_only_counted_once_with_two_ships() {
    let mut board = Board::new(6).unwrap();
    board
        .add_ship(Ship::new(c(0, 0), 1, Orientation::Vertical))
        .unwrap();
    board
        .add_ship(Ship::new(c(5, 4), 2, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting_memory();

    assert_eq!(board.shot(c(0, 0)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.destroyed_count(), 1);
    assert!(!board.is_defeated());
    assert_eq!(board.shot(c(5, 4)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.shot(c(5, 5)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.destroyed_count(), 2);
    assert!(board.is_defeated());
}

#[test]
fn test_hidden_flag_is_metadata_only() {
    let mut board = board_with_three_deck();
    board.set_hidden(true);
    assert!(board.hidden());
    assert_eq!(board.cell(c(0, 0)), Some(CellState::Ship));
    assert_eq!(board.shot(c(0, 0)).unwrap(), ShotOutcome::Hit);
}

#[test]
fn test_board_too_large() {
    assert!(matches!(Board::new(12), Err(BoardError::BitBoard(_))));
    assert!(Board::new(11).is_ok());
    assert_eq!(Board::default().size(), 6);
}

#[test]
fn test_board_size_overflow_is_an_error() {
    assert!(matches!(Board::new(1usize << 33), Err(BoardError::BitBoard(_))));
    assert!(matches!(Board::new(usize::MAX), Err(BoardError::BitBoard(_))));
}

#[test]
fn test_placement_at_coordinate_limits() {
    let mut board = Board::new(6).unwrap();
    for ship in [
        Ship::new(c(i32::MAX, 0), 1, Orientation::Vertical),
        Ship::new(c(0, i32::MAX), 1, Orientation::Horizontal),
        Ship::new(c(i32::MAX - 1, 0), 3, Orientation::Vertical),
        Ship::new(c(i32::MIN, i32::MIN), 2, Orientation::Horizontal),
        Ship::new(c(0, 0), usize::MAX, Orientation::Vertical),
    ] {
        assert_eq!(board.add_ship(ship), Err(BoardError::InvalidPlacement));
    }
    assert!(board.ships().is_empty());
    assert_eq!(
        board.shot(c(i32::MAX, i32::MIN)).unwrap_err(),
        BoardError::OutOfBounds(c(i32::MAX, i32::MIN))
    );
    assert_eq!(
        BoardError::OutOfBounds(c(i32::MAX, 0)).to_string(),
        "shot at 2147483648 1 is off the board"
    );
}

#[test]
fn test_ship_in_the_corner_clears_only_the_grid() {
    let mut board = Board::new(6).unwrap();
    board
        .add_ship(Ship::new(c(5, 5), 1, Orientation::Horizontal))
        .unwrap();
    board.reset_targeting_memory();
    assert_eq!(board.shot(c(5, 5)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.untargeted_cells().count(), 36 - 4);
}
