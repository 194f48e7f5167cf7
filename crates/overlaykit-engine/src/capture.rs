//! # Point Capture
//!
//! One [`PointCapture`] per overlay being drawn. It accumulates committed
//! anchor points until the template's required count is reached:
//!
//! ```text
//! Idle ──commit──▶ Capturing(1) ──commit──▶ … ──commit──▶ Complete
//!   ▲                   │                                    │
//!   └──────abort────────┴───────────────abort────────────────┘
//! ```
//!
//! Captures never share state; the engine keys them by [`CaptureHandle`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use overlaykit_core::{ExtraData, Figure, OverlayStyle, Point};

use crate::projection::RenderEnv;
use crate::template::{GenerateContext, OverlayTemplate};

/// Identifies an in-progress capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptureHandle(pub u64);

impl std::fmt::Display for CaptureHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "points", rename_all = "snake_case")]
pub enum CaptureState {
    Idle,
    /// Points committed so far, below the required count
    Capturing(usize),
    Complete,
}

/// Point accumulation for one overlay being drawn.
#[derive(Debug, Clone)]
pub struct PointCapture {
    template: String,
    required_points: usize,
    points: Vec<Point>,
    state: CaptureState,
    style: OverlayStyle,
    extra: ExtraData,
}

impl PointCapture {
    pub fn new(template: &OverlayTemplate, style: OverlayStyle, extra: ExtraData) -> Self {
        Self {
            template: template.name().to_string(),
            required_points: template.required_points(),
            points: Vec::with_capacity(template.required_points()),
            state: CaptureState::Idle,
            style,
            extra,
        }
    }

    /// Appends a point and advances the state. Commits after completion are
    /// ignored so the point count never exceeds the requirement.
    pub fn commit(&mut self, point: Point) -> CaptureState {
        if self.state == CaptureState::Complete {
            debug!(
                "Capture for '{}' already complete, ignoring point",
                self.template
            );
            return self.state;
        }
        self.points.push(point);
        self.state = if self.points.len() >= self.required_points {
            CaptureState::Complete
        } else {
            CaptureState::Capturing(self.points.len())
        };
        debug!(
            "Capture '{}': {}/{} points",
            self.template,
            self.points.len(),
            self.required_points
        );
        self.state
    }

    /// Discards every committed point and returns to `Idle`.
    pub fn abort(&mut self) {
        debug!(
            "Capture '{}' aborted after {} points",
            self.template,
            self.points.len()
        );
        self.points.clear();
        self.state = CaptureState::Idle;
    }

    /// Figures for the points captured so far.
    pub fn preview(&self, template: &OverlayTemplate, env: &RenderEnv<'_>) -> Vec<Figure> {
        template.generate(&GenerateContext::new(&self.points, env, &self.extra))
    }

    pub fn template_name(&self) -> &str {
        &self.template
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == CaptureState::Complete
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn extra(&self) -> &ExtraData {
        &self.extra
    }

    /// Consumes a capture into the parts needed to create an instance.
    pub fn into_parts(self) -> (String, Vec<Point>, OverlayStyle, ExtraData) {
        (self.template, self.points, self.style, self.extra)
    }
}
