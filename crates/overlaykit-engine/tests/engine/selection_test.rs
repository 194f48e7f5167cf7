// Selection/edit controller tests, driven through the engine facade

use overlaykit_core::{ExtraData, OverlayId, OverlayStyle, Point};
use overlaykit_engine::{
    EngineOptions, HostEvent, OverlayEngine, SelectionState, TemplateCatalog,
};

fn engine_with(name: &str, points: Vec<Point>) -> (OverlayEngine, OverlayId) {
    let mut engine = OverlayEngine::with_builtins();
    let id = engine
        .create_instance(name, points, OverlayStyle::new(), ExtraData::new())
        .unwrap();
    (engine, id)
}

fn two_points() -> Vec<Point> {
    vec![Point::new(10.0, 10.0), Point::new(50.0, 30.0)]
}

#[test]
fn test_excluded_templates_never_selected() {
    let (mut engine, circle) = engine_with("circle", vec![Point::new(5.0, 5.0)]);
    let segment = engine
        .create_instance("segment", two_points(), OverlayStyle::new(), ExtraData::new())
        .unwrap();
    let ray = engine
        .create_instance("rayLine", two_points(), OverlayStyle::new(), ExtraData::new())
        .unwrap();

    for prior in [None, Some(circle)] {
        engine.set_selection(prior);
        assert_eq!(engine.set_selection(Some(segment)), SelectionState::NoSelection);

        engine.set_selection(prior);
        let state = engine.handle_event(&HostEvent::OverlaySelected {
            id: ray,
            name: "rayLine".to_string(),
        });
        assert_eq!(state, SelectionState::NoSelection);
    }
}

#[test]
fn test_draw_completed_selects() {
    let (mut engine, id) = engine_with("trendAngle", two_points());
    let state = engine.handle_event(&HostEvent::DrawCompleted {
        id,
        name: "trendAngle".to_string(),
    });
    assert_eq!(state, SelectionState::Selected(id));
    assert_eq!(
        engine.handle_event(&HostEvent::Deselected),
        SelectionState::NoSelection
    );
}

#[test]
fn test_edit_selected_overlay() {
    let (mut engine, id) = engine_with("trendAngle", two_points());
    engine.set_selection(Some(id));

    assert!(engine.set_selected_color("#00aaff").unwrap());
    assert_eq!(engine.set_selected_thickness(42.0).unwrap(), Some(10.0));

    let style = engine.selected_style().unwrap();
    assert_eq!(style.color.as_deref(), Some("#00aaff"));
    assert_eq!(style.thickness, Some(10.0));

    assert!(engine.remove_selected());
    assert_eq!(engine.selection_state(), SelectionState::NoSelection);
    assert!(engine.instance(id).is_none());
}

#[test]
fn test_selection_of_removed_id_clears() {
    let (mut engine, id) = engine_with("circle", vec![Point::new(5.0, 5.0)]);
    engine.remove_instance(id);
    assert_eq!(engine.set_selection(Some(id)), SelectionState::NoSelection);
}

#[test]
fn test_selected_style_uses_defaults() {
    let (mut engine, id) = engine_with("circle", vec![Point::new(5.0, 5.0)]);
    engine.set_selection(Some(id));
    let style = engine.selected_style().unwrap();
    assert_eq!(style.color.as_deref(), Some("#ff0000"));
    assert_eq!(style.thickness, Some(2.0));
}

#[test]
fn test_event_for_absent_overlay_clears() {
    let (mut engine, id) = engine_with("circle", vec![Point::new(5.0, 5.0)]);
    engine.set_selection(Some(id));

    let state = engine.handle_event(&HostEvent::OverlaySelected {
        id: OverlayId::new(),
        name: "circle".to_string(),
    });
    assert_eq!(state, SelectionState::NoSelection);
    assert!(!engine.set_selected_color("#000000").unwrap());
    assert_eq!(engine.store().len(), 1);
}

#[test]
fn test_event_uses_stored_template_name() {
    let (mut engine, segment) = engine_with("segment", two_points());
    let state = engine.handle_event(&HostEvent::DrawCompleted {
        id: segment,
        name: "circle".to_string(),
    });
    assert_eq!(state, SelectionState::NoSelection);

    let circle = engine
        .create_instance(
            "circle",
            vec![Point::new(1.0, 1.0)],
            OverlayStyle::new(),
            ExtraData::new(),
        )
        .unwrap();
    let state = engine.handle_event(&HostEvent::OverlaySelected {
        id: circle,
        name: "segment".to_string(),
    });
    assert_eq!(state, SelectionState::Selected(circle));
}

#[test]
fn test_inverted_thickness_range_does_not_panic() {
    let options = EngineOptions {
        thickness_range: (10.0, 1.0),
        ..EngineOptions::default()
    };
    let mut engine = OverlayEngine::new(TemplateCatalog::with_builtins(), options);
    let id = engine
        .create_instance(
            "circle",
            vec![Point::new(5.0, 5.0)],
            OverlayStyle::new(),
            ExtraData::new(),
        )
        .unwrap();
    engine.set_selection(Some(id));

    assert_eq!(engine.set_selected_thickness(5.0).unwrap(), Some(5.0));
    assert_eq!(engine.set_selected_thickness(0.0).unwrap(), Some(1.0));
    assert_eq!(engine.set_selected_thickness(f64::NAN).unwrap(), Some(1.0));
}
