use super::*;
use nalgebra::Vector2;
use proptest::prelude::*;

#[test]
fn half_distance_of_coincident_points_is_exactly_zero() {
    let p = Vector2::new(3.25, -7.5);
    assert_eq!(half_distance(p, p), 0.0);
}

#[test]
fn spanning_circle_matches_worked_example() {
    // Chord (1,1)-(3,1): center (2,1), radius 1.
    let c = Circle::spanning(Vector2::new(1.0, 1.0), Vector2::new(3.0, 1.0));
    assert_eq!(c.center, Vector2::new(2.0, 1.0));
    assert_eq!(c.radius, 1.0);
}

#[test]
fn circle_touching_all_four_edges_is_inside() {
    let b = Box2::new(0.0, 0.0, 2.0, 2.0);
    let c = Circle {
        center: Vector2::new(1.0, 1.0),
        radius: 1.0,
    };
    assert!(b.contains_circle(&c));
}

#[test]
fn any_positive_excess_escapes() {
    let b = Box2::new(0.0, 0.0, 2.0, 2.0);
    let eps = 1e-12;
    let inscribed = 1.0;
    let c = Circle {
        center: Vector2::new(1.0, 1.0),
        radius: inscribed + eps,
    };
    assert!(!b.contains_circle(&c));
    // One-sided excess too: shift the center instead of growing the radius.
    for (dx, dy) in [(eps, 0.0), (-eps, 0.0), (0.0, eps), (0.0, -eps)] {
        let shifted = Circle {
            center: Vector2::new(1.0 + dx, 1.0 + dy),
            radius: inscribed,
        };
        assert!(!b.contains_circle(&shifted), "shift ({dx}, {dy})");
    }
}

proptest! {
    #[test]
    fn half_distance_is_symmetric_and_nonnegative(
        x1 in -1e3..1e3f64, y1 in -1e3..1e3f64,
        x2 in -1e3..1e3f64, y2 in -1e3..1e3f64,
    ) {
        let p1 = Vector2::new(x1, y1);
        let p2 = Vector2::new(x2, y2);
        let d = half_distance(p1, p2);
        prop_assert!(d >= 0.0);
        prop_assert_eq!(d, half_distance(p2, p1));
    }

    #[test]
    fn spanning_radius_is_half_the_chord(
        x1 in -1e3..1e3f64, y1 in -1e3..1e3f64,
        x2 in -1e3..1e3f64, y2 in -1e3..1e3f64,
    ) {
        let p1 = Vector2::new(x1, y1);
        let p2 = Vector2::new(x2, y2);
        let c = Circle::spanning(p1, p2);
        prop_assert!((2.0 * c.radius - (p2 - p1).norm()).abs() <= 1e-9);
        prop_assert!((c.center - (p1 + p2) / 2.0).norm() <= 1e-9);
    }

    #[test]
    fn containment_survives_shrinking_the_radius(
        cx in 2.0..8.0f64, cy in 2.0..8.0f64,
        r in 0.0..2.0f64, shrink in 0.0..1.0f64,
    ) {
        let b = Box2::new(0.0, 0.0, 10.0, 10.0);
        let center = Vector2::new(cx, cy);
        let big = Circle { center, radius: r };
        let small = Circle { center, radius: r * shrink };
        if b.contains_circle(&big) {
            prop_assert!(b.contains_circle(&small));
        }
    }
}
