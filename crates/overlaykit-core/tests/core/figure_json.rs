// Wire shape of figures as handed to a host renderer

use overlaykit_core::{Figure, FigureStyle, FillMode, Point, StrokeStyle, TextAlign, TextBaseline};

#[test]
fn test_polygon_json_shape() {
    let figure = Figure::polygon(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
    ])
    .styled(FigureStyle::new().color("#4A90E2").fill(FillMode::StrokeFill, 0.5));

    let json = serde_json::to_value(&figure).unwrap();
    assert_eq!(json["type"], "polygon");
    assert_eq!(json["coordinates"].as_array().unwrap().len(), 3);
    assert_eq!(json["style"]["fill"], "stroke_fill");
    assert!(json["coordinates"][0].get("data_index").is_none());
}

#[test]
fn test_text_json_shape() {
    let figure = Figure::text(Point::new(4.0, 5.0), "SL")
        .aligned(TextAlign::Right, TextBaseline::Middle)
        .styled(FigureStyle::new().stroke_style(StrokeStyle::Dashed));
    let json = serde_json::to_value(&figure).unwrap();
    assert_eq!(json["type"], "text");
    assert_eq!(json["align"], "right");
    assert_eq!(json["baseline"], "middle");
    assert_eq!(json["style"]["stroke_style"], "dashed");
}

#[test]
fn test_host_json_parses() {
    let figure: Figure =
        serde_json::from_str(r#"{"type":"arc","x":1,"y":2,"r":3,"start_angle":0,"end_angle":3.14}"#)
            .unwrap();
    assert_eq!(figure.kind(), "arc");
    assert_eq!(figure.style(), &FigureStyle::default());
}
