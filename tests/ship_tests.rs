use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{Orientation, Placement};

#[test]
fn test_cells_follow_orientation() {
    let h = Placement::new(2, 3, 3, Orientation::Horizontal);
    assert_eq!(h.cells().collect::<Vec<_>>(), vec![(2, 3), (2, 4), (2, 5)]);
    let v = Placement::new(2, 3, 3, Orientation::Vertical);
    assert_eq!(v.cells().collect::<Vec<_>>(), vec![(2, 3), (3, 3), (4, 3)]);
}

#[test]
fn test_fits_at_the_edge() {
    assert!(Placement::new(0, 6, 4, Orientation::Horizontal).fits(10));
    assert!(!Placement::new(0, 7, 4, Orientation::Horizontal).fits(10));
    assert!(Placement::new(6, 0, 4, Orientation::Vertical).fits(10));
    assert!(!Placement::new(7, 0, 4, Orientation::Vertical).fits(10));
    assert!(!Placement::new(0, 0, 0, Orientation::Horizontal).fits(10));
}

#[test]
fn test_rotation_and_random_orientation() {
    assert_eq!(Orientation::Horizontal.rotated(), Orientation::Vertical);
    assert_eq!(Orientation::Vertical.rotated(), Orientation::Horizontal);
    assert_eq!(Orientation::default(), Orientation::Horizontal);

    let mut rng = SmallRng::seed_from_u64(17);
    let horizontal = (0..200)
        .filter(|_| Orientation::random(&mut rng) == Orientation::Horizontal)
        .count();
    assert!(horizontal > 50 && horizontal < 150);
}
