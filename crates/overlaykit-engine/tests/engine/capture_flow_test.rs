// Point capture flow tests: progressive preview, completion, abort

use overlaykit_core::{Bounding, ExtraData, Figure, OverlayError, OverlayStyle, Point};
use overlaykit_engine::{
    CaptureState, GenerateContext, OverlayEngine, OverlayTemplate, RenderEnv, TemplateCatalog,
};

fn env() -> RenderEnv<'static> {
    RenderEnv::new(Bounding::new(0.0, 0.0, 800.0, 400.0))
}

fn kinds(figures: &[Figure]) -> Vec<&'static str> {
    figures.iter().map(Figure::kind).collect()
}

#[test]
fn test_head_shoulders_progressive_preview() {
    let mut engine = OverlayEngine::with_builtins();
    let handle = engine.begin_capture("headShoulders").unwrap();
    let clicks = [
        Point::new(10.0, 200.0),
        Point::new(40.0, 100.0),
        Point::new(70.0, 200.0),
        Point::new(20.0, 250.0),
        Point::new(60.0, 250.0),
    ];

    let mut previews = Vec::new();
    for point in clicks {
        previews.push(engine.commit_point(handle, point, &env()).unwrap());
    }

    assert_eq!(kinds(&previews[0].figures), vec!["text"]);
    assert_eq!(kinds(&previews[1].figures), vec!["line", "text", "text"]);
    assert_eq!(
        kinds(&previews[3].figures),
        vec!["line", "line", "text", "text", "text", "text"]
    );
    assert!(previews[..4].iter().all(|p| !p.complete));

    let done = &previews[4];
    assert!(done.complete);
    let id = done.instance.unwrap();
    assert_eq!(engine.instance(id).unwrap().points().len(), 5);
}

#[test]
fn test_abort_leaves_no_instance() {
    let mut engine = OverlayEngine::with_builtins();
    let handle = engine.begin_capture("position").unwrap();
    engine
        .commit_point(handle, Point::new(100.0, 100.0), &env())
        .unwrap();
    engine.abort_capture(handle);

    assert_eq!(engine.capture_state(handle), None);
    assert!(engine.store().is_empty());
    assert!(matches!(
        engine.commit_point(handle, Point::new(1.0, 1.0), &env()),
        Err(OverlayError::UnknownCapture { .. })
    ));
    // aborting again is harmless
    engine.abort_capture(handle);
}

#[test]
fn test_parallel_captures_do_not_share_points() {
    let mut engine = OverlayEngine::with_builtins();
    let fan = engine.begin_capture("fibFanCustom").unwrap();
    let wedge = engine.begin_capture("fibWedge").unwrap();

    engine.commit_point(fan, Point::new(0.0, 0.0), &env()).unwrap();
    engine.commit_point(wedge, Point::new(5.0, 5.0), &env()).unwrap();
    engine.commit_point(wedge, Point::new(6.0, 6.0), &env()).unwrap();

    assert_eq!(engine.capture_state(fan), Some(CaptureState::Capturing(1)));
    assert_eq!(engine.capture_state(wedge), Some(CaptureState::Capturing(2)));
}

#[test]
fn test_begin_capture_unknown_template() {
    let mut engine = OverlayEngine::with_builtins();
    assert!(matches!(
        engine.begin_capture("gannBox"),
        Err(OverlayError::UnknownTemplate { .. })
    ));
}

#[test]
fn test_completed_figures_carry_capture_style() {
    let mut engine = OverlayEngine::with_builtins();
    let handle = engine
        .begin_capture_with(
            "crossLine",
            OverlayStyle::new().with_color("#333333").with_thickness(3.0),
            ExtraData::new(),
        )
        .unwrap();
    let outcome = engine
        .commit_point(handle, Point::new(100.0, 100.0), &env())
        .unwrap();
    assert!(outcome.complete);
    assert_eq!(outcome.figures.len(), 2);
    for figure in &outcome.figures {
        assert_eq!(figure.style().color.as_deref(), Some("#333333"));
        assert_eq!(figure.style().thickness, Some(3.0));
    }
}

#[test]
fn test_custom_template_and_duplicate() {
    fn dot(ctx: &GenerateContext<'_>) -> Vec<Figure> {
        ctx.points.iter().map(|p| Figure::circle(*p, 3.0)).collect()
    }

    let mut engine = OverlayEngine::new(TemplateCatalog::new(), Default::default());
    engine
        .register_template(OverlayTemplate::new("dot", 1, dot))
        .unwrap();
    assert!(matches!(
        engine.register_template(OverlayTemplate::new("dot", 2, dot)),
        Err(OverlayError::DuplicateName { .. })
    ));
    assert_eq!(engine.list_template_names(), vec!["dot".to_string()]);

    let handle = engine.begin_capture("dot").unwrap();
    let outcome = engine
        .commit_point(handle, Point::new(1.0, 2.0), &env())
        .unwrap();
    assert_eq!(outcome.figures, vec![Figure::circle(Point::new(1.0, 2.0), 3.0)]);
}
