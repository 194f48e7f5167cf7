//! Overlay templates: the reusable rule behind a class of overlays.

use std::sync::Arc;

use overlaykit_core::{Bounding, Candle, ExtraData, Figure, Point};

use crate::projection::{AxisProjector, RenderEnv};

/// Everything a figure generator may read. Generators are pure functions of
/// this context; they never see the store or any other mutable state.
#[derive(Clone, Copy)]
pub struct GenerateContext<'a> {
    /// Anchor points captured so far, in click order
    pub points: &'a [Point],
    pub bounding: Bounding,
    pub series: &'a [Candle],
    pub projector: Option<&'a dyn AxisProjector>,
    /// Parameters fixed at creation time
    pub extra: &'a ExtraData,
}

impl<'a> GenerateContext<'a> {
    pub fn new(points: &'a [Point], env: &RenderEnv<'a>, extra: &'a ExtraData) -> Self {
        Self {
            points,
            bounding: env.bounding,
            series: env.series,
            projector: env.projector,
            extra,
        }
    }

    /// The anchor at `index`, if captured yet.
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// First two anchors, if both are present.
    pub fn pair(&self) -> Option<(Point, Point)> {
        Some((self.point(0)?, self.point(1)?))
    }

    /// String value of an extra-data key.
    pub fn extra_str(&self, key: &str) -> Option<&'a str> {
        self.extra.get(key).and_then(|v| v.as_str())
    }
}

/// Turns captured points into figures.
///
/// Must not panic for any point count, including zero: insufficient input
/// yields an empty or partial list.
pub trait FigureGenerator: Send + Sync {
    fn generate(&self, ctx: &GenerateContext<'_>) -> Vec<Figure>;
}

impl<F> FigureGenerator for F
where
    F: Fn(&GenerateContext<'_>) -> Vec<Figure> + Send + Sync,
{
    fn generate(&self, ctx: &GenerateContext<'_>) -> Vec<Figure> {
        self(ctx)
    }
}

/// A registered drawing tool.
#[derive(Clone)]
pub struct OverlayTemplate {
    name: String,
    required_points: usize,
    preview_min: usize,
    show_default_anchors: bool,
    generator: Arc<dyn FigureGenerator>,
}

impl OverlayTemplate {
    /// Creates a template. `required_points` is clamped to at least 1; the
    /// preview minimum starts equal to it and anchors are shown by default.
    pub fn new(
        name: impl Into<String>,
        required_points: usize,
        generator: impl FigureGenerator + 'static,
    ) -> Self {
        let required_points = required_points.max(1);
        Self {
            name: name.into(),
            required_points,
            preview_min: required_points,
            show_default_anchors: true,
            generator: Arc::new(generator),
        }
    }

    /// Fewest captured points for which a preview is generated, clamped
    /// into `1..=required_points`.
    pub fn with_preview_min(mut self, preview_min: usize) -> Self {
        self.preview_min = preview_min.clamp(1, self.required_points);
        self
    }

    pub fn with_default_anchors(mut self, show: bool) -> Self {
        self.show_default_anchors = show;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_points(&self) -> usize {
        self.required_points
    }

    pub fn preview_min(&self) -> usize {
        self.preview_min
    }

    pub fn show_default_anchors(&self) -> bool {
        self.show_default_anchors
    }

    /// Generates figures for the given context.
    ///
    /// Returns nothing below the preview minimum; points beyond
    /// `required_points` are ignored.
    pub fn generate(&self, ctx: &GenerateContext<'_>) -> Vec<Figure> {
        if ctx.points.len() < self.preview_min {
            return Vec::new();
        }
        let points = &ctx.points[..ctx.points.len().min(self.required_points)];
        let ctx = GenerateContext { points, ..*ctx };
        let figures = self.generator.generate(&ctx);
        tracing::trace!(
            template = %self.name,
            points = points.len(),
            figures = figures.len(),
            "generated figures"
        );
        figures
    }
}

impl std::fmt::Debug for OverlayTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayTemplate")
            .field("name", &self.name)
            .field("required_points", &self.required_points)
            .field("preview_min", &self.preview_min)
            .field("show_default_anchors", &self.show_default_anchors)
            .finish_non_exhaustive()
    }
}
