use seabattle::{Coordinate, Orientation, Ship};

#[test]
fn test_vertical_cells_follow_rows() {
    let ship = Ship::new(Coordinate::new(0, 0), 3, Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0)
        ]
    );
}

#[test]
fn test_horizontal_cells_follow_columns() {
    let ship = Ship::new(Coordinate::new(4, 2), 2, Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coordinate::new(4, 2), Coordinate::new(4, 3)]);
    assert_eq!(ship.cells().len(), 2);
}

#[test]
fn test_is_hit_by() {
    let ship = Ship::new(Coordinate::new(1, 1), 3, Orientation::Horizontal);
    for c in 1..4 {
        assert!(ship.is_hit_by(Coordinate::new(1, c)));
    }
    assert!(!ship.is_hit_by(Coordinate::new(1, 4)));
    assert!(!ship.is_hit_by(Coordinate::new(2, 1)));
    // no side effect
    assert_eq!(ship.remaining_hits(), 3);
}

#[test]
fn test_cells_may_leave_the_grid() {
    // Bounds belong to the board; a ship just computes its cells.
    let ship = Ship::new(Coordinate::new(6, 5), 2, Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Coordinate::new(6, 5), Coordinate::new(6, 6)]);
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(Coordinate::new(0, 0), 2, Orientation::Vertical);
    assert!(!ship.is_sunk());
    assert!(!ship.register_hit());
    assert_eq!(ship.remaining_hits(), 1);
    assert!(ship.register_hit());
    assert!(ship.is_sunk());
    // further hits do not underflow or re-report the sink
    assert!(!ship.register_hit());
    assert_eq!(ship.remaining_hits(), 0);
}

#[test]
fn test_cells_stop_at_the_coordinate_limit() {
    let ship = Ship::new(Coordinate::new(i32::MAX - 1, 3), 4, Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(i32::MAX - 1, 3), Coordinate::new(i32::MAX, 3)]
    );
    assert_eq!(ship.cells().len(), 2);
}

#[test]
fn test_is_hit_by_near_the_coordinate_limit() {
    let ship = Ship::new(Coordinate::new(0, i32::MAX), 1, Orientation::Horizontal);
    assert!(!ship.is_hit_by(Coordinate::new(0, 0)));
    assert!(ship.is_hit_by(Coordinate::new(0, i32::MAX)));

    let ship = Ship::new(Coordinate::new(i32::MIN, 0), usize::MAX, Orientation::Vertical);
    assert!(ship.is_hit_by(Coordinate::new(i32::MAX, 0)));
    assert!(!ship.is_hit_by(Coordinate::new(i32::MAX, 1)));
}
