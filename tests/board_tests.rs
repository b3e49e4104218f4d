use seabattle::{
    Board, Cell, Coordinate, Orientation, PlacementError, Ship, ShotError, ShotOutcome,
};

fn ship(row: usize, col: usize, length: usize, orientation: Orientation) -> Ship {
    Ship::new(Coordinate::new(row, col), length, orientation)
}

#[test]
fn test_single_cell_ship_destroyed_then_rejected() {
    let mut board = Board::new(6);
    board
        .place_ship(ship(2, 2, 1, Orientation::Horizontal))
        .unwrap();
    board.begin_play();

    assert_eq!(
        board.resolve_shot(Coordinate::new(2, 2)).unwrap(),
        ShotOutcome::Destroyed
    );
    assert_eq!(board.destroyed_count(), 1);
    assert!(board.all_destroyed());

    assert_eq!(
        board.resolve_shot(Coordinate::new(2, 2)).unwrap_err(),
        ShotError::AlreadyTargeted(Coordinate::new(2, 2))
    );
    assert_eq!(
        board.resolve_shot(Coordinate::new(0, 0)).unwrap(),
        ShotOutcome::Miss
    );
    assert_eq!(board.cell(Coordinate::new(0, 0)), Some(Cell::Miss));
}

#[test]
fn test_three_cell_ship_hit_hit_destroyed() {
    let mut board = Board::new(6);
    board
        .place_ship(ship(0, 0, 3, Orientation::Horizontal))
        .unwrap();
    board.begin_play();

    assert_eq!(
        board.resolve_shot(Coordinate::new(0, 1)).unwrap(),
        ShotOutcome::Hit
    );
    assert_eq!(
        board.resolve_shot(Coordinate::new(0, 0)).unwrap(),
        ShotOutcome::Hit
    );
    assert_eq!(board.destroyed_count(), 0);
    assert_eq!(
        board.resolve_shot(Coordinate::new(0, 2)).unwrap(),
        ShotOutcome::Destroyed
    );
    assert_eq!(board.destroyed_count(), 1);
    assert!(board.ships()[0].is_sunk());
    for c in 0..3 {
        assert_eq!(board.cell(Coordinate::new(0, c)), Some(Cell::Hit));
    }
}

#[test]
fn test_diagonal_neighbour_placement_rejected() {
    let mut board = Board::new(6);
    board
        .place_ship(ship(2, 2, 1, Orientation::Horizontal))
        .unwrap();
    assert_eq!(
        board.place_ship(ship(3, 3, 2, Orientation::Horizontal)),
        Err(PlacementError::WrongShipPlacement)
    );
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.cell(Coordinate::new(3, 3)), Some(Cell::Empty));
}

#[test]
fn test_overlapping_placement_rejected() {
    let mut board = Board::new(6);
    board
        .place_ship(ship(1, 1, 3, Orientation::Vertical))
        .unwrap();
    assert_eq!(
        board.place_ship(ship(2, 0, 3, Orientation::Horizontal)),
        Err(PlacementError::WrongShipPlacement)
    );
}

#[test]
fn test_partially_out_of_bounds_placement_leaves_board_untouched() {
    let mut board = Board::new(6);
    assert_eq!(
        board.place_ship(ship(0, 4, 3, Orientation::Horizontal)),
        Err(PlacementError::WrongShipPlacement)
    );
    assert!(board.ships().is_empty());
    assert_eq!(board.cell(Coordinate::new(0, 4)), Some(Cell::Empty));
    assert_eq!(board.cell(Coordinate::new(0, 5)), Some(Cell::Empty));
    assert!(!board.is_excluded(Coordinate::new(0, 4)));
}

#[test]
fn test_bow_on_boundary_is_out_of_bounds() {
    let mut board = Board::new(6);
    assert!(board.is_out_of_bounds(Coordinate::new(6, 0)));
    assert!(board.is_out_of_bounds(Coordinate::new(0, 6)));
    assert!(!board.is_out_of_bounds(Coordinate::new(5, 5)));
    assert_eq!(
        board.place_ship(ship(6, 0, 1, Orientation::Vertical)),
        Err(PlacementError::WrongShipPlacement)
    );
}

#[test]
fn test_zero_length_ship_rejected() {
    let mut board = Board::new(6);
    assert_eq!(
        board.place_ship(ship(0, 0, 0, Orientation::Horizontal)),
        Err(PlacementError::WrongShipPlacement)
    );
}

#[test]
fn test_shot_out_of_bounds() {
    let mut board = Board::new(6);
    board.begin_play();
    assert_eq!(
        board.resolve_shot(Coordinate::new(6, 0)).unwrap_err(),
        ShotError::OutOfBounds(Coordinate::new(6, 0))
    );
    assert_eq!(
        board.resolve_shot(Coordinate::new(0, 17)).unwrap_err(),
        ShotError::OutOfBounds(Coordinate::new(0, 17))
    );
}

#[test]
fn test_contour_reserved_during_setup_and_freed_for_play() {
    let mut board = Board::new(6);
    board
        .place_ship(ship(0, 0, 2, Orientation::Horizontal))
        .unwrap();
    assert!(board.is_excluded(Coordinate::new(1, 2)));
    assert!(board.is_excluded(Coordinate::new(0, 2)));
    assert_eq!(board.cell(Coordinate::new(1, 2)), Some(Cell::Empty));

    board.begin_play();
    assert!(!board.is_excluded(Coordinate::new(1, 2)));
    assert_eq!(
        board.resolve_shot(Coordinate::new(1, 0)).unwrap(),
        ShotOutcome::Miss
    );
}

#[test]
fn test_destroyed_ship_contour_revealed_as_misses() {
    let mut board = Board::new(6);
    board
        .place_ship(ship(2, 2, 1, Orientation::Horizontal))
        .unwrap();
    board.begin_play();
    board.resolve_shot(Coordinate::new(2, 2)).unwrap();

    for n in Coordinate::new(2, 2).neighbors() {
        assert_eq!(board.cell(n), Some(Cell::Miss), "{:?}", n);
        assert_eq!(
            board.resolve_shot(n).unwrap_err(),
            ShotError::AlreadyTargeted(n)
        );
    }
    assert_eq!(board.cell(Coordinate::new(2, 2)), Some(Cell::Hit));
    assert_eq!(board.cell(Coordinate::new(0, 0)), Some(Cell::Empty));
}

#[test]
fn test_hidden_board_masks_ships() {
    let mut board = Board::new(6);
    board
        .place_ship(ship(4, 1, 2, Orientation::Horizontal))
        .unwrap();
    board.begin_play();
    assert_eq!(board.visible_cell(Coordinate::new(4, 1)), Some(Cell::Occupied));

    board.set_hidden(true);
    assert_eq!(board.visible_cell(Coordinate::new(4, 1)), Some(Cell::Empty));
    assert_eq!(board.cell(Coordinate::new(4, 1)), Some(Cell::Occupied));

    board.resolve_shot(Coordinate::new(4, 1)).unwrap();
    assert_eq!(board.visible_cell(Coordinate::new(4, 1)), Some(Cell::Hit));
    assert_eq!(board.visible_cell(Coordinate::new(6, 6)), None);
}

#[test]
fn test_empty_board_is_not_destroyed() {
    let board = Board::new(6);
    assert!(!board.all_destroyed());
}
