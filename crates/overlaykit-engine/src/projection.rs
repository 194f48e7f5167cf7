//! Axis projection and the per-call rendering environment.
//!
//! Templates never reach into a chart singleton. Everything they read
//! besides their own anchor points arrives through a [`RenderEnv`]: the
//! visible plot rectangle, the series slice and, for tools that map between
//! series indices/prices and pixels, an injected [`AxisProjector`].

use overlaykit_core::{Bounding, Candle};

/// Read-only mapping between series space and pixel space, supplied by the host.
pub trait AxisProjector {
    /// Pixel x of the bar at `index`.
    fn index_to_x(&self, index: usize) -> f64;

    /// Pixel y of a price value.
    fn value_to_y(&self, value: f64) -> f64;

    /// Price value at pixel y.
    fn y_to_value(&self, y: f64) -> f64;
}

/// Affine projector: evenly spaced bars and a linear price axis.
///
/// Pixel y grows downwards, so `max_value` maps to `bounding.top` and
/// `min_value` to `bounding.bottom()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearProjector {
    bounding: Bounding,
    first_index: usize,
    bar_spacing: f64,
    min_value: f64,
    max_value: f64,
}

impl LinearProjector {
    pub fn new(
        bounding: Bounding,
        first_index: usize,
        bar_spacing: f64,
        min_value: f64,
        max_value: f64,
    ) -> Self {
        Self {
            bounding,
            first_index,
            bar_spacing,
            min_value,
            max_value,
        }
    }

    /// Fits the whole series into `bounding`: bars spread over the full
    /// width, price range spanning the lowest low to the highest high.
    pub fn fit(bounding: Bounding, series: &[Candle]) -> Self {
        let (min_value, max_value) = series.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), c| (lo.min(c.low), hi.max(c.high)),
        );
        let (min_value, max_value) = if min_value.is_finite() && max_value.is_finite() {
            (min_value, max_value)
        } else {
            (0.0, 1.0)
        };
        let bar_spacing = if series.len() > 1 {
            bounding.width / (series.len() - 1) as f64
        } else {
            bounding.width
        };
        Self::new(bounding, 0, bar_spacing, min_value, max_value)
    }

    fn value_range(&self) -> f64 {
        self.max_value - self.min_value
    }
}

impl AxisProjector for LinearProjector {
    fn index_to_x(&self, index: usize) -> f64 {
        self.bounding.left + (index as f64 - self.first_index as f64) * self.bar_spacing
    }

    fn value_to_y(&self, value: f64) -> f64 {
        let range = self.value_range();
        if range.abs() < f64::EPSILON {
            return self.bounding.top + self.bounding.height / 2.0;
        }
        self.bounding.top + (self.max_value - value) / range * self.bounding.height
    }

    fn y_to_value(&self, y: f64) -> f64 {
        if self.bounding.height.abs() < f64::EPSILON {
            return self.min_value;
        }
        self.max_value - (y - self.bounding.top) / self.bounding.height * self.value_range()
    }
}

/// Host-supplied context for one generation call.
#[derive(Clone, Copy)]
pub struct RenderEnv<'a> {
    pub bounding: Bounding,
    pub series: &'a [Candle],
    pub projector: Option<&'a dyn AxisProjector>,
}

impl<'a> RenderEnv<'a> {
    pub fn new(bounding: Bounding) -> Self {
        Self {
            bounding,
            series: &[],
            projector: None,
        }
    }

    pub fn with_series(mut self, series: &'a [Candle]) -> Self {
        self.series = series;
        self
    }

    pub fn with_projector(mut self, projector: &'a dyn AxisProjector) -> Self {
        self.projector = Some(projector);
        self
    }
}

impl std::fmt::Debug for RenderEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderEnv")
            .field("bounding", &self.bounding)
            .field("series_len", &self.series.len())
            .field("has_projector", &self.projector.is_some())
            .finish()
    }
}
