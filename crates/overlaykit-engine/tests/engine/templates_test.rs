// Built-in template geometry tests
// Exercises every built-in through the catalog, the way a host would.

use overlaykit_core::{Bounding, Candle, ExtraData, Figure, Point};
use overlaykit_engine::builtins::{self, position::reward_risk_label};
use overlaykit_engine::{GenerateContext, LinearProjector, RenderEnv, TemplateCatalog};

fn plot() -> Bounding {
    Bounding::new(0.0, 0.0, 800.0, 400.0)
}

fn generate(catalog: &TemplateCatalog, name: &str, points: &[Point]) -> Vec<Figure> {
    let extra = ExtraData::new();
    let env = RenderEnv::new(plot());
    let template = catalog.get(name).unwrap();
    template.generate(&GenerateContext::new(points, &env, &extra))
}

fn polygon_vertices(figure: &Figure) -> &[Point] {
    match figure {
        Figure::Polygon { coordinates, .. } => coordinates,
        other => panic!("expected polygon, got {}", other.kind()),
    }
}

#[test]
fn test_below_preview_minimum_is_empty() {
    let catalog = TemplateCatalog::with_builtins();
    for name in builtins::BUILTIN_NAMES {
        let template = catalog.get(name).unwrap();
        let points: Vec<Point> = (0..template.preview_min() - 1)
            .map(|i| Point::new(10.0 * i as f64, 20.0))
            .collect();
        assert!(
            generate(&catalog, name, &points).is_empty(),
            "{} produced figures below its preview minimum",
            name
        );
    }
}

#[test]
fn test_rectangle_corners() {
    let catalog = TemplateCatalog::with_builtins();
    let figures = generate(&catalog, "rectangle", &[Point::new(10.0, 10.0)]);
    assert_eq!(figures.len(), 1);
    assert_eq!(
        polygon_vertices(&figures[0]),
        &[
            Point::new(10.0, 10.0),
            Point::new(90.0, 10.0),
            Point::new(90.0, 70.0),
            Point::new(10.0, 70.0),
        ]
    );
}

#[test]
fn test_rotated_rectangle_round_trip() {
    let catalog = TemplateCatalog::with_builtins();
    let anchor = Point::new(200.0, 150.0);
    let figures = generate(&catalog, "rotated-rectangle", &[anchor]);
    let back: Vec<Point> = polygon_vertices(&figures[0])
        .iter()
        .map(|p| overlaykit_core::rotate_point(anchor, *p, -std::f64::consts::PI / 6.0))
        .collect();

    let expected = [(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (0.0, 50.0)];
    assert_eq!(back.len(), 4);
    for (p, (dx, dy)) in back.iter().zip(expected) {
        assert!((p.x - (anchor.x + dx)).abs() < 1e-9, "x {} vs {}", p.x, anchor.x + dx);
        assert!((p.y - (anchor.y + dy)).abs() < 1e-9, "y {} vs {}", p.y, anchor.y + dy);
    }
}

#[test]
fn test_position_reward_risk() {
    assert_eq!(reward_risk_label(100.0, 95.0, 110.0), "2.00");
    assert_eq!(reward_risk_label(100.0, 100.0, 110.0), "∞");

    let catalog = TemplateCatalog::with_builtins();
    let figures = generate(
        &catalog,
        "position",
        &[
            Point::new(50.0, 100.0),
            Point::new(50.0, 95.0),
            Point::new(50.0, 110.0),
        ],
    );
    assert!(figures
        .iter()
        .any(|f| matches!(f, Figure::Text { content, .. } if content == "RRR 2.00")));
}

#[test]
fn test_fib_circles_radii() {
    let catalog = TemplateCatalog::with_builtins();
    let figures = generate(
        &catalog,
        "fibCircles",
        &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
    );
    let radii: Vec<f64> = figures
        .iter()
        .map(|f| match f {
            Figure::Arc { r, .. } => *r,
            other => panic!("expected arc, got {}", other.kind()),
        })
        .collect();
    assert_eq!(radii.len(), 5);
    for (r, expected) in radii.iter().zip([0.236, 0.382, 0.5, 0.618, 1.0]) {
        assert!((r - 100.0 * expected).abs() < 1e-9);
    }
}

#[test]
fn test_regression_trend_through_catalog() {
    let catalog = TemplateCatalog::with_builtins();
    let series: Vec<Candle> = [10.0, 12.0, 14.0]
        .iter()
        .enumerate()
        .map(|(i, c)| Candle::from_close(i as i64, *c))
        .collect();
    let projector = LinearProjector::new(plot(), 0, 100.0, 0.0, 40.0);
    let env = RenderEnv::new(plot())
        .with_series(&series)
        .with_projector(&projector);
    let extra = ExtraData::new();
    let template = catalog.get("regressionTrend").unwrap();

    let points = [Point::with_index(0.0, 0.0, 0), Point::with_index(200.0, 0.0, 2)];
    let figures = template.generate(&GenerateContext::new(&points, &env, &extra));
    match figures.as_slice() {
        [Figure::Line { coordinates, .. }] => {
            // close 10 at index 0, fitted 14 at index 2
            assert!((coordinates[0].y - 300.0).abs() < 1e-9);
            assert!((coordinates[1].y - 260.0).abs() < 1e-9);
            assert_eq!(coordinates[1].x, 200.0);
        }
        other => panic!("expected one line, got {} figures", other.len()),
    }

    let single = [Point::with_index(0.0, 0.0, 1), Point::with_index(10.0, 0.0, 1)];
    assert!(template
        .generate(&GenerateContext::new(&single, &env, &extra))
        .is_empty());
}

#[test]
fn test_pattern_labels_follow_clicks() {
    let catalog = TemplateCatalog::with_builtins();
    let points = [
        Point::new(0.0, 100.0),
        Point::new(20.0, 40.0),
        Point::new(40.0, 80.0),
    ];
    let labels: Vec<String> = generate(&catalog, "xabcdPattern", &points)
        .into_iter()
        .filter_map(|f| match f {
            Figure::Text { content, .. } => Some(content),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["X", "A", "B"]);
}
