//! Geometry primitives.
//!
//! Pure 2D helpers used by every overlay template: distance, inclination
//! angle, rotation about an origin, linear interpolation and an ordinary
//! least-squares line fit. All coordinates are in rendered (pixel) space.

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, Result};

/// A coordinate in rendered space, optionally snapped to a series index.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Index into the underlying time series this point was snapped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_index: Option<usize>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            data_index: None,
        }
    }

    /// Creates a point snapped to a series index.
    pub fn with_index(x: f64, y: f64, data_index: usize) -> Self {
        Self {
            x,
            y,
            data_index: Some(data_index),
        }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }

    /// Returns this point moved by `(dx, dy)`. The series index is dropped
    /// since the result is no longer snapped.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// The visible plot rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounding {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounding {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Result of a least-squares line fit: `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Inclination of the segment `a -> b` in degrees, in `[-180, 180]`.
pub fn angle_degrees(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Rotates `point` about `origin` by `angle` radians.
pub fn rotate_point(origin: Point, point: Point, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    Point::new(origin.x + dx * c - dy * s, origin.y + dx * s + dy * c)
}

/// Linear interpolation between `a` and `b`; `t = 0` gives `a`, `t = 1` gives `b`.
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Ordinary least-squares fit of `ys` against `xs`.
///
/// Returns [`OverlayError::DegenerateGeometry`] when fewer than two samples
/// are given, the slices differ in length, or every `x` is equal (the
/// denominator `n·Σx² − (Σx)²` vanishes). Callers inside figure generators
/// recover by emitting no figures.
pub fn least_squares_fit(xs: &[f64], ys: &[f64]) -> Result<LinearFit> {
    if xs.len() != ys.len() {
        return Err(OverlayError::degenerate(format!(
            "sample length mismatch: {} xs, {} ys",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 2 {
        return Err(OverlayError::degenerate(format!(
            "need at least 2 samples, got {}",
            xs.len()
        )));
    }

    let n = xs.len() as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_x2: f64 = xs.iter().map(|x| x * x).sum();

    if xs.iter().all(|x| *x == xs[0]) {
        return Err(OverlayError::degenerate("all x values are equal"));
    }
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(OverlayError::degenerate(format!(
            "x values too close to fit (denominator {})",
            denominator
        )));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok(LinearFit { slope, intercept })
}
