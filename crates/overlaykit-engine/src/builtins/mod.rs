//! Built-in overlay templates.
//!
//! Grouped by tool family:
//! - [`shapes`]: one-click rectangle, rotated rectangle, circle, triangle
//! - [`position`]: risk/reward position with entry, stop and target
//! - [`fibonacci`]: circles, spiral, arcs, wedge, fan, extension, time
//!   zones, channel and retracement
//! - [`lines`]: trend angle, cross line, flat top/bottom, regression trend
//!   and the straight-line family
//! - [`patterns`]: XABCD-style chart patterns and head-and-shoulders

pub mod fibonacci;
pub mod lines;
pub mod patterns;
pub mod position;
pub mod shapes;

use overlaykit_core::{Bounding, Point, Result};

use crate::catalog::TemplateCatalog;
use crate::template::OverlayTemplate;

/// Names of every built-in template, in registration order.
pub const BUILTIN_NAMES: &[&str] = &[
    shapes::RECTANGLE,
    shapes::ROTATED_RECTANGLE,
    shapes::CIRCLE,
    shapes::TRIANGLE,
    position::POSITION,
    fibonacci::FIB_CIRCLES,
    fibonacci::FIB_SPIRAL,
    fibonacci::FIB_ARCS,
    fibonacci::FIB_WEDGE,
    fibonacci::FIB_FAN,
    fibonacci::FIB_EXTENSION,
    fibonacci::FIB_TIME_ZONE,
    fibonacci::FIB_CHANNEL,
    fibonacci::FIB_RETRACEMENT,
    lines::TREND_ANGLE,
    lines::CROSS_LINE,
    lines::FLAT_TOP_BOTTOM,
    lines::REGRESSION_TREND,
    lines::SEGMENT,
    lines::RAY_LINE,
    lines::STRAIGHT_LINE,
    lines::PRICE_LINE,
    lines::HORIZONTAL_STRAIGHT_LINE,
    lines::HORIZONTAL_RAY_LINE,
    lines::VERTICAL_STRAIGHT_LINE,
    lines::PARALLEL_STRAIGHT_LINE,
    lines::PRICE_CHANNEL_LINE,
    patterns::XABCD,
    patterns::CYPHER,
    patterns::ABCD,
    patterns::TRIANGLE_PATTERN,
    patterns::THREE_DRIVES,
    patterns::ELLIOTT_WAVE,
    patterns::ELLIOTT_IMPULSE,
    patterns::ELLIOTT_CORRECTION,
    patterns::HEAD_SHOULDERS,
];

/// Fallback names a host may request for tools registered under a custom name.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("fibonacciExtension", fibonacci::FIB_EXTENSION),
    ("fibonacciChannel", fibonacci::FIB_CHANNEL),
    ("fibonacciTimeLine", fibonacci::FIB_TIME_ZONE),
    ("fibonacciFanLine", fibonacci::FIB_FAN),
];

/// Every built-in template, in [`BUILTIN_NAMES`] order.
pub fn all() -> Vec<OverlayTemplate> {
    let mut templates = shapes::templates();
    templates.push(position::template());
    templates.extend(fibonacci::templates());
    templates.extend(lines::templates());
    templates.extend(patterns::templates());
    templates
}

/// Registers every built-in template. Returns how many were added.
///
/// Stops at the first rejected registration, so calling this on a catalog
/// that already holds a built-in name fails with `DuplicateName`.
pub fn register_builtins(catalog: &mut TemplateCatalog) -> Result<usize> {
    let templates = all();
    let count = templates.len();
    for template in templates {
        catalog.register(template)?;
    }
    tracing::debug!("Registered {} built-in templates", count);
    Ok(count)
}

/// Full-width horizontal line at `y`.
pub(crate) fn horizontal_span(bounding: &Bounding, y: f64) -> [Point; 2] {
    [
        Point::new(bounding.left, y),
        Point::new(bounding.right(), y),
    ]
}

/// Full-height vertical line at `x`.
pub(crate) fn vertical_span(bounding: &Bounding, x: f64) -> [Point; 2] {
    [
        Point::new(x, bounding.top),
        Point::new(x, bounding.bottom()),
    ]
}

/// Where the ray from `origin` through `through` leaves the plot.
///
/// Never stops short of `through`; a zero-length direction yields `through`.
pub(crate) fn ray_end(origin: Point, through: Point, bounding: &Bounding) -> Point {
    let dx = through.x - origin.x;
    let dy = through.y - origin.y;
    if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
        return Point::new(through.x, through.y);
    }

    let exit = |delta: f64, from: f64, low: f64, high: f64| -> f64 {
        if delta > 0.0 {
            (high - from) / delta
        } else if delta < 0.0 {
            (low - from) / delta
        } else {
            f64::INFINITY
        }
    };
    let t = exit(dx, origin.x, bounding.left, bounding.right())
        .min(exit(dy, origin.y, bounding.top, bounding.bottom()));
    let t = if t.is_finite() { t.max(1.0) } else { 1.0 };
    Point::new(origin.x + dx * t, origin.y + dy * t)
}

/// The line through `a` and `b`, extended to the plot border in both directions.
pub(crate) fn extended_line(a: Point, b: Point, bounding: &Bounding) -> [Point; 2] {
    [ray_end(b, a, bounding), ray_end(a, b, bounding)]
}
