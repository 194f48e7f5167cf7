// Overlay instance store tests

use overlaykit_core::{Bounding, ExtraData, OverlayError, OverlayId, OverlayStyle, Point};
use overlaykit_engine::{OverlayStore, RenderEnv, TemplateCatalog};

fn fib_points() -> Vec<Point> {
    vec![Point::new(100.0, 100.0), Point::new(180.0, 40.0)]
}

#[test]
fn test_remove_twice_is_not_an_error() {
    let catalog = TemplateCatalog::with_builtins();
    let mut store = OverlayStore::new();
    let id = store
        .create(
            &catalog,
            "fibSpiral",
            fib_points(),
            OverlayStyle::new(),
            ExtraData::new(),
        )
        .unwrap();
    assert!(store.remove(id));
    assert!(!store.remove(id));
    assert!(store.is_empty());
}

#[test]
fn test_partial_delta_preserves_thickness() {
    let catalog = TemplateCatalog::with_builtins();
    let mut store = OverlayStore::new();
    let id = store
        .create(
            &catalog,
            "trendAngle",
            fib_points(),
            OverlayStyle::new().with_color("#ff0000").with_thickness(4.0),
            ExtraData::new(),
        )
        .unwrap();

    store
        .update_style(id, &OverlayStyle::new().with_color("#000"))
        .unwrap();
    let style = store.get(id).unwrap().style();
    assert_eq!(style.color.as_deref(), Some("#000"));
    assert_eq!(style.thickness, Some(4.0));
}

#[test]
fn test_update_absent_id_is_noop() {
    let mut store = OverlayStore::new();
    assert!(store
        .update_style(OverlayId::new(), &OverlayStyle::new().with_color("#000"))
        .is_ok());
    assert!(store.is_empty());
}

#[test]
fn test_render_twice_is_value_equal() {
    let catalog = TemplateCatalog::with_builtins();
    let mut store = OverlayStore::new();
    let env = RenderEnv::new(Bounding::new(0.0, 0.0, 800.0, 400.0));
    for name in ["fibSpiral", "fibTimeZoneCustom", "flatTopBottom", "straightLine"] {
        let id = store
            .create(
                &catalog,
                name,
                fib_points(),
                OverlayStyle::new().with_thickness(3.0),
                ExtraData::new(),
            )
            .unwrap();
        let first = store.render_figures(&catalog, id, &env).unwrap();
        let second = store.render_figures(&catalog, id, &env).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second, "{} rendered differently", name);
    }
}

#[test]
fn test_unknown_and_mismatch_are_distinct() {
    let catalog = TemplateCatalog::with_builtins();
    let mut store = OverlayStore::new();
    let unknown = store
        .create(
            &catalog,
            "pitchfork",
            fib_points(),
            OverlayStyle::new(),
            ExtraData::new(),
        )
        .unwrap_err();
    let mismatch = store
        .create(
            &catalog,
            "circle",
            fib_points(),
            OverlayStyle::new(),
            ExtraData::new(),
        )
        .unwrap_err();
    assert!(matches!(unknown, OverlayError::UnknownTemplate { .. }));
    assert!(matches!(
        mismatch,
        OverlayError::PointCountMismatch {
            expected: 1,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn test_extra_data_survives_style_edits() {
    let catalog = TemplateCatalog::with_builtins();
    let mut store = OverlayStore::new();
    let mut extra = ExtraData::new();
    extra.insert("side".to_string(), serde_json::json!("short"));
    let id = store
        .create(
            &catalog,
            "position",
            vec![
                Point::new(50.0, 100.0),
                Point::new(50.0, 110.0),
                Point::new(50.0, 80.0),
            ],
            OverlayStyle::new(),
            extra.clone(),
        )
        .unwrap();
    store
        .update_style(id, &OverlayStyle::new().with_thickness(5.0))
        .unwrap();
    assert_eq!(store.get(id).unwrap().extra(), &extra);
}
