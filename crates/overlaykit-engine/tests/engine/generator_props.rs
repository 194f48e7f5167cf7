// Property tests: every built-in generator is total over finite input

use overlaykit_core::{Bounding, Candle, ExtraData, Figure, Point};
use overlaykit_engine::builtins::BUILTIN_NAMES;
use overlaykit_engine::{GenerateContext, LinearProjector, RenderEnv, TemplateCatalog};
use proptest::prelude::*;

fn point_strategy() -> impl Strategy<Value = Point> {
    (
        -1000.0f64..1000.0,
        -1000.0f64..1000.0,
        proptest::option::of(0usize..40),
    )
        .prop_map(|(x, y, index)| match index {
            Some(i) => Point::with_index(x, y, i),
            None => Point::new(x, y),
        })
}

fn series() -> Vec<Candle> {
    (0..20)
        .map(|i| Candle::from_close(i, 100.0 + (i as f64 * 0.7).sin() * 5.0))
        .collect()
}

fn all_finite(figure: &Figure) -> bool {
    match figure {
        Figure::Line { coordinates, .. } | Figure::Polygon { coordinates, .. } => coordinates
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite()),
        Figure::Circle { x, y, r, .. } => x.is_finite() && y.is_finite() && r.is_finite(),
        Figure::Arc { x, y, r, .. } => x.is_finite() && y.is_finite() && r.is_finite(),
        Figure::Text { x, y, .. } => x.is_finite() && y.is_finite(),
    }
}

proptest! {
    #[test]
    fn generators_never_panic(points in proptest::collection::vec(point_strategy(), 0..7)) {
        let catalog = TemplateCatalog::with_builtins();
        let bounding = Bounding::new(0.0, 0.0, 800.0, 400.0);
        let series = series();
        let projector = LinearProjector::fit(bounding, &series);
        let env = RenderEnv::new(bounding)
            .with_series(&series)
            .with_projector(&projector);
        let extra = ExtraData::new();
        let ctx = GenerateContext::new(&points, &env, &extra);

        for name in BUILTIN_NAMES {
            let template = catalog.get(name).unwrap();
            let figures = template.generate(&ctx);
            if points.len() < template.preview_min() {
                prop_assert!(figures.is_empty());
            }
            prop_assert!(figures.iter().all(all_finite), "{} emitted a non-finite figure", name);
        }
    }

    #[test]
    fn line_figures_have_two_or_more_points(points in proptest::collection::vec(point_strategy(), 0..7)) {
        let catalog = TemplateCatalog::with_builtins();
        let env = RenderEnv::new(Bounding::new(0.0, 0.0, 800.0, 400.0));
        let extra = ExtraData::new();
        let ctx = GenerateContext::new(&points, &env, &extra);

        for name in BUILTIN_NAMES {
            for figure in catalog.get(name).unwrap().generate(&ctx) {
                match figure {
                    Figure::Line { coordinates, .. } => prop_assert!(coordinates.len() >= 2),
                    Figure::Polygon { coordinates, .. } => prop_assert!(coordinates.len() >= 3),
                    _ => {}
                }
            }
        }
    }
}
