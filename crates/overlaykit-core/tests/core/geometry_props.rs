// Property tests for the geometry primitives

use overlaykit_core::{angle_degrees, distance, lerp, least_squares_fit, rotate_point, Point};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -10_000.0f64..10_000.0
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn rotation_round_trip(origin in point(), p in point(), angle in -10.0f64..10.0) {
        let back = rotate_point(origin, rotate_point(origin, p, angle), -angle);
        prop_assert!((back.x - p.x).abs() < 1e-6);
        prop_assert!((back.y - p.y).abs() < 1e-6);
    }

    #[test]
    fn rotation_preserves_distance(origin in point(), p in point(), angle in -10.0f64..10.0) {
        let rotated = rotate_point(origin, p, angle);
        prop_assert!((distance(origin, rotated) - distance(origin, p)).abs() < 1e-6);
    }

    #[test]
    fn angle_in_range(a in point(), b in point()) {
        let angle = angle_degrees(a, b);
        prop_assert!((-180.0..=180.0).contains(&angle));
    }

    #[test]
    fn lerp_endpoints(a in point(), b in point()) {
        prop_assert_eq!(lerp(a, b, 0.0), a);
        let end = lerp(a, b, 1.0);
        prop_assert!((end.x - b.x).abs() < 1e-9 && (end.y - b.y).abs() < 1e-9);
    }

    #[test]
    fn exact_lines_are_recovered(
        slope in -50.0f64..50.0,
        intercept in -500.0f64..500.0,
        n in 2usize..60,
    ) {
        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| slope * x + intercept).collect();
        let fit = least_squares_fit(&xs, &ys).unwrap();
        prop_assert!((fit.slope - slope).abs() < 1e-6);
        prop_assert!((fit.intercept - intercept).abs() < 1e-6);
    }
}

#[test]
fn test_fit_rejects_constant_x() {
    assert!(least_squares_fit(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_err());
}
