//! Overlay identity and user-editable style.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{OverlayError, Result};
use crate::figure::StrokeStyle;

/// Tool-specific parameters fixed when an overlay is created
/// (e.g. `side: "long"` for a position tool).
pub type ExtraData = BTreeMap<String, serde_json::Value>;

/// Unique identifier of a placed overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayId(Uuid);

impl OverlayId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for OverlayId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OverlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OverlayId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Style overrides of a placed overlay.
///
/// Also used as a partial delta: [`OverlayStyle::merge`] copies only the
/// fields the delta sets, so unspecified fields are preserved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_style: Option<StrokeStyle>,
}

impl OverlayStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn with_stroke_style(mut self, stroke_style: StrokeStyle) -> Self {
        self.stroke_style = Some(stroke_style);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.thickness.is_none() && self.stroke_style.is_none()
    }

    /// Overwrites the fields `delta` sets; leaves the rest untouched.
    pub fn merge(&mut self, delta: &OverlayStyle) {
        if let Some(color) = &delta.color {
            self.color = Some(color.clone());
        }
        if let Some(thickness) = delta.thickness {
            self.thickness = Some(thickness);
        }
        if let Some(stroke_style) = delta.stroke_style {
            self.stroke_style = Some(stroke_style);
        }
    }

    /// Returns a copy with `self` layered over `base`.
    pub fn layered_over(&self, base: &OverlayStyle) -> OverlayStyle {
        let mut out = base.clone();
        out.merge(self);
        out
    }

    /// Rejects empty colours and non-positive or non-finite thickness.
    pub fn validate(&self) -> Result<()> {
        if let Some(color) = &self.color {
            if color.trim().is_empty() {
                return Err(OverlayError::invalid_style("color must not be empty"));
            }
        }
        if let Some(thickness) = self.thickness {
            if !thickness.is_finite() || thickness <= 0.0 {
                return Err(OverlayError::invalid_style(format!(
                    "thickness must be a positive number, got {}",
                    thickness
                )));
            }
        }
        Ok(())
    }
}
