use super::*;

#[test]
fn coord_step_stops_at_zero() {
    let origin = Coord::new(0, 0);
    assert_eq!(origin.step(Direction::Up), None);
    assert_eq!(origin.step(Direction::Left), None);
    assert_eq!(origin.step(Direction::Right), Some(Coord::new(1, 0)));
    assert_eq!(origin.step(Direction::Down), Some(Coord::new(0, 1)));
}

#[test]
fn direction_to_finds_orthogonal_neighbors_only() {
    let c = Coord::new(2, 2);
    assert_eq!(c.direction_to(Coord::new(2, 1)), Some(Direction::Up));
    assert_eq!(c.direction_to(Coord::new(1, 2)), Some(Direction::Left));
    assert_eq!(c.direction_to(Coord::new(3, 3)), None);
    assert_eq!(c.direction_to(c), None);
}

#[test]
fn opposite_is_an_involution() {
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::Left.opposite(), Direction::Right);
    for d in Direction::ALL {
        assert_eq!(d.opposite().opposite(), d);
        assert_ne!(d.opposite(), d);
    }
}

#[test]
fn coord_serializes_as_pair() {
    let json = serde_json::to_string(&Coord::new(4, 7)).unwrap();
    assert_eq!(json, "[4,7]");
    let back: Coord = serde_json::from_str("[9, 1]").unwrap();
    assert_eq!(back, Coord::new(9, 1));
}
