use seabattle::{Coordinate, Orientation, Ship};

#[test]
fn test_horizontal_cells_extend_along_row() {
    let ship = Ship::new(Coordinate::new(0, 0), 3, Orientation::Horizontal);
    assert_eq!(
        ship.occupied_cells(),
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(0, 2)
        ]
    );
}

#[test]
fn test_vertical_cells_extend_along_column() {
    let ship = Ship::new(Coordinate::new(1, 4), 2, Orientation::Vertical);
    assert_eq!(
        ship.occupied_cells(),
        vec![Coordinate::new(1, 4), Coordinate::new(2, 4)]
    );
}

#[test]
fn test_is_hit_by() {
    let ship = Ship::new(Coordinate::new(2, 2), 2, Orientation::Vertical);
    assert!(ship.is_hit_by(Coordinate::new(2, 2)));
    assert!(ship.is_hit_by(Coordinate::new(3, 2)));
    assert!(!ship.is_hit_by(Coordinate::new(4, 2)));
    assert!(!ship.is_hit_by(Coordinate::new(2, 3)));
}

#[test]
fn test_new_ship_is_afloat() {
    let ship = Ship::new(Coordinate::new(0, 0), 3, Orientation::Horizontal);
    assert_eq!(ship.remaining_hits(), 3);
    assert!(!ship.is_sunk());
}

#[test]
fn test_coordinate_neighbors() {
    let corner: Vec<_> = Coordinate::new(0, 0).neighbors().collect();
    assert_eq!(corner.len(), 3);
    assert!(corner.contains(&Coordinate::new(1, 1)));

    let inner: Vec<_> = Coordinate::new(2, 2).neighbors().collect();
    assert_eq!(inner.len(), 8);
    assert!(!inner.contains(&Coordinate::new(2, 2)));
    assert!(inner
        .iter()
        .all(|n| n.is_adjacent_or_equal(&Coordinate::new(2, 2))));
}

#[test]
fn test_coordinate_display_is_one_based() {
    assert_eq!(Coordinate::new(0, 4).to_string(), "1, 5");
}
