//! Fibonacci-family tools.
//!
//! Every level comes from [`FibRatio`]; nothing here hard-codes a ratio.

use std::f64::consts::PI;

use overlaykit_core::{
    lerp, FibRatio, Figure, FigureStyle, Point, TextAlign, TextBaseline, FIB_TIME_SEQUENCE,
};

use crate::template::{GenerateContext, OverlayTemplate};

pub const FIB_CIRCLES: &str = "fibCircles";
pub const FIB_SPIRAL: &str = "fibSpiral";
pub const FIB_ARCS: &str = "fibArcs";
pub const FIB_WEDGE: &str = "fibWedge";
pub const FIB_FAN: &str = "fibFanCustom";
pub const FIB_EXTENSION: &str = "fibExtensionCustom";
pub const FIB_TIME_ZONE: &str = "fibTimeZoneCustom";
pub const FIB_CHANNEL: &str = "fibChannelCustom";
pub const FIB_RETRACEMENT: &str = "fibonacciLine";

/// Spiral polyline segment count
pub const SPIRAL_STEPS: usize = 64;
const SPIRAL_ANGLE_STEP: f64 = PI / 16.0;
const SPIRAL_GROWTH: f64 = 1.618;
const SPIRAL_GROWTH_PERIOD: f64 = 12.0;

const LABEL_FONT_SIZE: f64 = 11.0;

pub fn templates() -> Vec<OverlayTemplate> {
    vec![
        OverlayTemplate::new(FIB_CIRCLES, 2, circles),
        OverlayTemplate::new(FIB_SPIRAL, 2, spiral),
        OverlayTemplate::new(FIB_ARCS, 2, arcs),
        OverlayTemplate::new(FIB_WEDGE, 3, wedge),
        OverlayTemplate::new(FIB_FAN, 2, fan),
        OverlayTemplate::new(FIB_EXTENSION, 2, extension),
        OverlayTemplate::new(FIB_TIME_ZONE, 2, time_zones),
        OverlayTemplate::new(FIB_CHANNEL, 3, channel).with_preview_min(2),
        OverlayTemplate::new(FIB_RETRACEMENT, 2, retracement),
    ]
}

fn circles(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let r = p1.distance_to(&p2);
    FibRatio::CIRCLE_LEVELS
        .iter()
        .map(|level| Figure::arc(p1, r * level.value(), 0.0, 2.0 * PI))
        .collect()
}

/// Logarithmic spiral approximation: point `i` at angle `i·π/16` and radius
/// `r·1.618^(i/12)` from the first anchor.
fn spiral(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let r = p1.distance_to(&p2);
    let coordinates = (0..=SPIRAL_STEPS)
        .map(|i| {
            let theta = i as f64 * SPIRAL_ANGLE_STEP;
            let radius = r * SPIRAL_GROWTH.powf(i as f64 / SPIRAL_GROWTH_PERIOD);
            Point::new(p1.x + radius * theta.cos(), p1.y + radius * theta.sin())
        })
        .collect();
    vec![Figure::line(coordinates)]
}

fn arcs(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let r = p1.distance_to(&p2);
    FibRatio::ARC_LEVELS
        .iter()
        .map(|level| Figure::arc(p1, r * level.value(), 0.0, PI))
        .collect()
}

fn wedge(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let (Some(p1), Some(p2), Some(p3)) = (ctx.point(0), ctx.point(1), ctx.point(2)) else {
        return Vec::new();
    };
    let x_end = ctx.bounding.right();
    vec![
        Figure::segment(p1, Point::new(x_end, p2.y)),
        Figure::segment(p1, Point::new(x_end, p3.y)),
    ]
}

/// Speed-resistance fan: one ray per level ending at `p1 + (dx, dy·ratio)`.
fn fan(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    FibRatio::ARC_LEVELS
        .iter()
        .map(|level| Figure::segment(p1, p1.offset(dx, dy * level.value())))
        .collect()
}

fn extension(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let dy = p2.y - p1.y;
    let x_end = ctx.bounding.right();
    FibRatio::EXTENSION_LEVELS
        .iter()
        .map(|level| {
            let y = p1.y + dy * level.value();
            Figure::segment(Point::new(p2.x, y), Point::new(x_end, y))
        })
        .collect()
}

fn time_zones(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let dx = p2.x - p1.x;
    FIB_TIME_SEQUENCE
        .iter()
        .map(|n| {
            let [top, bottom] = super::vertical_span(&ctx.bounding, p1.x + dx * f64::from(*n));
            Figure::segment(top, bottom)
        })
        .collect()
}

/// Baseline `p1 → p2` plus parallel copies translated by `ratio·(p3 − p1)`.
/// With two anchors only the baseline is previewed.
fn channel(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let Some(p3) = ctx.point(2) else {
        return vec![Figure::segment(strip(p1), strip(p2))];
    };
    let dx = p3.x - p1.x;
    let dy = p3.y - p1.y;
    FibRatio::CHANNEL_LEVELS
        .iter()
        .map(|level| {
            let ratio = level.value();
            Figure::segment(
                p1.offset(dx * ratio, dy * ratio),
                p2.offset(dx * ratio, dy * ratio),
            )
        })
        .collect()
}

/// Retracement grid between the anchors' x, each level labelled with its
/// percentage and, when a projector is available, its price.
fn retracement(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let x_left = p1.x.min(p2.x);
    let x_right = p1.x.max(p2.x);
    let mut figures = Vec::with_capacity(FibRatio::RETRACEMENT_LEVELS.len() * 2);
    for level in FibRatio::RETRACEMENT_LEVELS {
        // `lerp` from p2 towards p1 gives `p2.y + (p1.y − p2.y)·ratio`
        let y = lerp(p2, p1, level.value()).y;
        figures.push(Figure::segment(Point::new(x_left, y), Point::new(x_right, y)));

        let content = match ctx.projector {
            Some(projector) => format!(
                "{} ({:.2})",
                level.percent_label(),
                projector.y_to_value(y)
            ),
            None => level.percent_label(),
        };
        figures.push(
            Figure::text(Point::new(x_left, y), content)
                .aligned(TextAlign::Left, TextBaseline::Bottom)
                .styled(FigureStyle::new().font_size(LABEL_FONT_SIZE)),
        );
    }
    figures
}

fn strip(p: Point) -> Point {
    Point::new(p.x, p.y)
}
