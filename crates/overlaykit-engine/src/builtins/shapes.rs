//! One-click shapes: each is placed whole from a single anchor using fixed
//! default dimensions.

use std::f64::consts::PI;

use overlaykit_core::{rotate_point, FigureStyle, FillMode, Figure, Point};

use crate::template::{GenerateContext, OverlayTemplate};

pub const RECTANGLE: &str = "rectangle";
pub const ROTATED_RECTANGLE: &str = "rotated-rectangle";
pub const CIRCLE: &str = "circle";
pub const TRIANGLE: &str = "triangle";

/// Opposite corner offset of the axis-aligned rectangle
pub const RECTANGLE_OFFSET: (f64, f64) = (80.0, 60.0);
pub const ROTATED_WIDTH: f64 = 100.0;
pub const ROTATED_HEIGHT: f64 = 50.0;
/// 30 degrees
pub const ROTATION: f64 = PI / 6.0;
pub const CIRCLE_RADIUS: f64 = 40.0;
pub const TRIANGLE_SIZE: f64 = 80.0;
/// sin(60°), height factor of an equilateral triangle
const TRIANGLE_HEIGHT_FACTOR: f64 = 0.866;

const FILL_OPACITY: f64 = 0.5;

pub fn templates() -> Vec<OverlayTemplate> {
    vec![
        OverlayTemplate::new(RECTANGLE, 1, rectangle),
        OverlayTemplate::new(ROTATED_RECTANGLE, 1, rotated_rectangle),
        OverlayTemplate::new(CIRCLE, 1, circle),
        OverlayTemplate::new(TRIANGLE, 1, triangle),
    ]
}

fn shape_style(color: &str) -> FigureStyle {
    FigureStyle::new()
        .color(color)
        .fill(FillMode::StrokeFill, FILL_OPACITY)
}

/// Anchor without its series index; derived vertices are never snapped.
fn anchor(ctx: &GenerateContext<'_>) -> Option<Point> {
    ctx.point(0).map(|p| Point::new(p.x, p.y))
}

fn rectangle(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some(p) = anchor(ctx) else {
        return Vec::new();
    };
    let (w, h) = RECTANGLE_OFFSET;
    vec![Figure::polygon(vec![
        p,
        p.offset(w, 0.0),
        p.offset(w, h),
        p.offset(0.0, h),
    ])
    .styled(shape_style("#4A90E2"))]
}

fn rotated_rectangle(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some(p) = anchor(ctx) else {
        return Vec::new();
    };
    let corners = [
        (0.0, 0.0),
        (ROTATED_WIDTH, 0.0),
        (ROTATED_WIDTH, ROTATED_HEIGHT),
        (0.0, ROTATED_HEIGHT),
    ]
    .into_iter()
    .map(|(lx, ly)| rotate_point(p, p.offset(lx, ly), ROTATION))
    .collect();
    vec![Figure::polygon(corners).styled(shape_style("#FF9800"))]
}

fn circle(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    match anchor(ctx) {
        Some(c) => vec![Figure::circle(c, CIRCLE_RADIUS).styled(shape_style("#7CB342"))],
        None => Vec::new(),
    }
}

fn triangle(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some(p) = anchor(ctx) else {
        return Vec::new();
    };
    let apex = p.offset(TRIANGLE_SIZE / 2.0, -TRIANGLE_SIZE * TRIANGLE_HEIGHT_FACTOR);
    vec![Figure::polygon(vec![p, p.offset(TRIANGLE_SIZE, 0.0), apex]).styled(shape_style("#E91E63"))]
}
