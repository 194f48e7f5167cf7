//! Line tools: trend angle, cross line, flat top/bottom, regression trend and
//! the straight-line family (segments, rays, horizontal/vertical lines,
//! parallel and price channels).

use overlaykit_core::{
    angle_degrees, least_squares_fit, Candle, Figure, FigureStyle, LinearFit, Point, TextAlign,
    TextBaseline,
};
use tracing::debug;

use super::{extended_line, horizontal_span, ray_end, vertical_span};
use crate::template::{GenerateContext, OverlayTemplate};

pub const TREND_ANGLE: &str = "trendAngle";
pub const CROSS_LINE: &str = "crossLine";
pub const FLAT_TOP_BOTTOM: &str = "flatTopBottom";
pub const REGRESSION_TREND: &str = "regressionTrend";
pub const SEGMENT: &str = "segment";
pub const RAY_LINE: &str = "rayLine";
pub const STRAIGHT_LINE: &str = "straightLine";
pub const PRICE_LINE: &str = "priceLine";
pub const HORIZONTAL_STRAIGHT_LINE: &str = "horizontalStraightLine";
pub const HORIZONTAL_RAY_LINE: &str = "horizontalRayLine";
pub const VERTICAL_STRAIGHT_LINE: &str = "verticalStraightLine";
pub const PARALLEL_STRAIGHT_LINE: &str = "parallelStraightLine";
pub const PRICE_CHANNEL_LINE: &str = "priceChannelLine";

const LABEL_FONT_SIZE: f64 = 12.0;

pub fn templates() -> Vec<OverlayTemplate> {
    vec![
        OverlayTemplate::new(TREND_ANGLE, 2, trend_angle).with_default_anchors(false),
        OverlayTemplate::new(CROSS_LINE, 1, cross_line).with_default_anchors(false),
        OverlayTemplate::new(FLAT_TOP_BOTTOM, 2, flat_top_bottom).with_default_anchors(false),
        OverlayTemplate::new(REGRESSION_TREND, 2, regression_trend).with_default_anchors(false),
        OverlayTemplate::new(SEGMENT, 2, segment),
        OverlayTemplate::new(RAY_LINE, 2, ray_line),
        OverlayTemplate::new(STRAIGHT_LINE, 2, straight_line),
        OverlayTemplate::new(PRICE_LINE, 1, price_line),
        OverlayTemplate::new(HORIZONTAL_STRAIGHT_LINE, 1, horizontal_straight_line),
        OverlayTemplate::new(HORIZONTAL_RAY_LINE, 2, horizontal_ray_line).with_preview_min(1),
        OverlayTemplate::new(VERTICAL_STRAIGHT_LINE, 1, vertical_straight_line),
        OverlayTemplate::new(PARALLEL_STRAIGHT_LINE, 3, parallel_straight_line)
            .with_preview_min(2),
        OverlayTemplate::new(PRICE_CHANNEL_LINE, 3, price_channel_line).with_preview_min(2),
    ]
}

fn trend_angle(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let angle = angle_degrees(p1, p2);
    vec![
        Figure::segment(p1, p2),
        Figure::text(Point::new(p2.x, p2.y), format!("{:.1}°", angle)),
    ]
}

fn cross_line(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some(p) = ctx.point(0) else {
        return Vec::new();
    };
    let [l, r] = horizontal_span(&ctx.bounding, p.y);
    let [t, b] = vertical_span(&ctx.bounding, p.x);
    vec![Figure::segment(l, r), Figure::segment(t, b)]
}

fn flat_top_bottom(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    [p1.y, p2.y]
        .into_iter()
        .map(|y| {
            let [l, r] = horizontal_span(&ctx.bounding, y);
            Figure::segment(l, r)
        })
        .collect()
}

/// A least-squares fit over a closed series range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionSpan {
    pub from_index: usize,
    pub to_index: usize,
    /// Fit of close against the offset from `from_index`
    pub fit: LinearFit,
}

impl RegressionSpan {
    /// Fitted close at the last index of the span.
    pub fn end_value(&self) -> f64 {
        self.fit.value_at((self.to_index - self.from_index) as f64)
    }
}

/// Fits the closes between the two anchors' series indices, inclusive.
///
/// Returns `None` when either anchor is not snapped to the series, or the
/// slice holds fewer than two candles.
pub fn regression_fit(points: &[Point], series: &[Candle]) -> Option<RegressionSpan> {
    let a = points.first()?.data_index?;
    let b = points.get(1)?.data_index?;
    let last = series.len().checked_sub(1)?;
    let from_index = a.min(b);
    let to_index = a.max(b).min(last);
    if from_index >= to_index {
        debug!(
            "Regression slice [{}, {}] shorter than two candles",
            from_index, to_index
        );
        return None;
    }

    let slice = &series[from_index..=to_index];
    let xs: Vec<f64> = (0..slice.len()).map(|i| i as f64).collect();
    let ys: Vec<f64> = slice.iter().map(|c| c.close).collect();
    match least_squares_fit(&xs, &ys) {
        Ok(fit) => Some(RegressionSpan {
            from_index,
            to_index,
            fit,
        }),
        Err(err) => {
            debug!("Regression skipped: {}", err);
            None
        }
    }
}

fn regression_trend(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some(projector) = ctx.projector else {
        return Vec::new();
    };
    let Some(span) = regression_fit(ctx.points, ctx.series) else {
        return Vec::new();
    };
    vec![Figure::segment(
        Point::new(
            projector.index_to_x(span.from_index),
            projector.value_to_y(span.fit.intercept),
        ),
        Point::new(
            projector.index_to_x(span.to_index),
            projector.value_to_y(span.end_value()),
        ),
    )]
}

fn segment(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    match ctx.pair() {
        Some((p1, p2)) => vec![Figure::segment(p1, p2)],
        None => Vec::new(),
    }
}

fn ray_line(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    match ctx.pair() {
        Some((p1, p2)) => vec![Figure::segment(p1, ray_end(p1, p2, &ctx.bounding))],
        None => Vec::new(),
    }
}

fn straight_line(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    match ctx.pair() {
        Some((p1, p2)) => {
            let [a, b] = extended_line(p1, p2, &ctx.bounding);
            vec![Figure::segment(a, b)]
        }
        None => Vec::new(),
    }
}

/// Horizontal ray to the right edge, labelled with the price when the
/// projector is known.
fn price_line(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some(p) = ctx.point(0) else {
        return Vec::new();
    };
    let mut figures = vec![Figure::segment(p, Point::new(ctx.bounding.right(), p.y))];
    if let Some(projector) = ctx.projector {
        figures.push(
            Figure::text(
                Point::new(p.x, p.y),
                format!("{:.2}", projector.y_to_value(p.y)),
            )
            .aligned(TextAlign::Left, TextBaseline::Bottom)
            .styled(FigureStyle::new().font_size(LABEL_FONT_SIZE)),
        );
    }
    figures
}

fn horizontal_straight_line(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    match ctx.point(0) {
        Some(p) => {
            let [l, r] = horizontal_span(&ctx.bounding, p.y);
            vec![Figure::segment(l, r)]
        }
        None => Vec::new(),
    }
}

/// Horizontal ray from the first anchor towards the side of the second
/// (rightwards until the second is placed).
fn horizontal_ray_line(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some(p1) = ctx.point(0) else {
        return Vec::new();
    };
    let x_end = match ctx.point(1) {
        Some(p2) if p2.x < p1.x => ctx.bounding.left,
        _ => ctx.bounding.right(),
    };
    vec![Figure::segment(p1, Point::new(x_end, p1.y))]
}

fn vertical_straight_line(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    match ctx.point(0) {
        Some(p) => {
            let [t, b] = vertical_span(&ctx.bounding, p.x);
            vec![Figure::segment(t, b)]
        }
        None => Vec::new(),
    }
}

/// Offset carrying the line `p1 → p2` through `p3`: vertical, or horizontal
/// when the line itself is vertical.
fn parallel_offset(p1: Point, p2: Point, p3: Point) -> (f64, f64) {
    let dx = p2.x - p1.x;
    if dx.abs() < f64::EPSILON {
        return (p3.x - p1.x, 0.0);
    }
    let slope = (p2.y - p1.y) / dx;
    (0.0, p3.y - (p1.y + (p3.x - p1.x) * slope))
}

fn shifted_line(ctx: &GenerateContext<'_>, p1: Point, p2: Point, dx: f64, dy: f64) -> Figure {
    let [a, b] = extended_line(p1.offset(dx, dy), p2.offset(dx, dy), &ctx.bounding);
    Figure::segment(a, b)
}

fn parallel_straight_line(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let mut figures = vec![shifted_line(ctx, p1, p2, 0.0, 0.0)];
    if let Some(p3) = ctx.point(2) {
        let (dx, dy) = parallel_offset(p1, p2, p3);
        figures.push(shifted_line(ctx, p1, p2, dx, dy));
    }
    figures
}

fn price_channel_line(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let Some((p1, p2)) = ctx.pair() else {
        return Vec::new();
    };
    let mut figures = vec![shifted_line(ctx, p1, p2, 0.0, 0.0)];
    if let Some(p3) = ctx.point(2) {
        let (dx, dy) = parallel_offset(p1, p2, p3);
        figures.push(shifted_line(ctx, p1, p2, dx, dy));
        figures.push(shifted_line(ctx, p1, p2, -dx, -dy));
    }
    figures
}
