//! Renderable figures emitted by overlay templates.
//!
//! A [`Figure`] is a closed tagged union with one variant per primitive kind.
//! Figures are value objects: templates build a fresh list on every call and
//! the host renders them as-is.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Stroke pattern for outlines and lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    Solid,
    Dashed,
}

impl std::fmt::Display for StrokeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Dashed => write!(f, "dashed"),
        }
    }
}

/// How closed shapes are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    Stroke,
    Fill,
    StrokeFill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Bottom,
}

/// Optional per-figure style. Unset fields fall back to the host's theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FigureStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_style: Option<StrokeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl FigureStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn stroke_style(mut self, stroke_style: StrokeStyle) -> Self {
        self.stroke_style = Some(stroke_style);
        self
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Fill mode plus opacity in `[0, 1]`.
    pub fn fill(mut self, fill: FillMode, opacity: f64) -> Self {
        self.fill = Some(fill);
        self.fill_opacity = Some(opacity);
        self
    }

    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }
}

/// A single renderable primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Figure {
    /// Open polyline through at least two points
    Line {
        coordinates: Vec<Point>,
        #[serde(default)]
        style: FigureStyle,
    },
    /// Closed shape through at least three points
    Polygon {
        coordinates: Vec<Point>,
        #[serde(default)]
        style: FigureStyle,
    },
    Circle {
        x: f64,
        y: f64,
        r: f64,
        #[serde(default)]
        style: FigureStyle,
    },
    /// Angles in radians, measured like `atan2`
    Arc {
        x: f64,
        y: f64,
        r: f64,
        start_angle: f64,
        end_angle: f64,
        #[serde(default)]
        style: FigureStyle,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        #[serde(default)]
        align: TextAlign,
        #[serde(default)]
        baseline: TextBaseline,
        #[serde(default)]
        style: FigureStyle,
    },
}

impl Figure {
    pub fn line(coordinates: Vec<Point>) -> Self {
        Figure::Line {
            coordinates,
            style: FigureStyle::default(),
        }
    }

    /// Straight segment between two points.
    pub fn segment(a: Point, b: Point) -> Self {
        Self::line(vec![a, b])
    }

    pub fn polygon(coordinates: Vec<Point>) -> Self {
        Figure::Polygon {
            coordinates,
            style: FigureStyle::default(),
        }
    }

    pub fn circle(center: Point, r: f64) -> Self {
        Figure::Circle {
            x: center.x,
            y: center.y,
            r,
            style: FigureStyle::default(),
        }
    }

    pub fn arc(center: Point, r: f64, start_angle: f64, end_angle: f64) -> Self {
        Figure::Arc {
            x: center.x,
            y: center.y,
            r,
            start_angle,
            end_angle,
            style: FigureStyle::default(),
        }
    }

    pub fn text(at: Point, content: impl Into<String>) -> Self {
        Figure::Text {
            x: at.x,
            y: at.y,
            content: content.into(),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            style: FigureStyle::default(),
        }
    }

    /// Sets text alignment; no effect on non-text figures.
    pub fn aligned(mut self, new_align: TextAlign, new_baseline: TextBaseline) -> Self {
        if let Figure::Text {
            align, baseline, ..
        } = &mut self
        {
            *align = new_align;
            *baseline = new_baseline;
        }
        self
    }

    /// Replaces the figure's style.
    pub fn styled(mut self, style: FigureStyle) -> Self {
        *self.style_mut() = style;
        self
    }

    pub fn style(&self) -> &FigureStyle {
        match self {
            Figure::Line { style, .. }
            | Figure::Polygon { style, .. }
            | Figure::Circle { style, .. }
            | Figure::Arc { style, .. }
            | Figure::Text { style, .. } => style,
        }
    }

    pub fn style_mut(&mut self) -> &mut FigureStyle {
        match self {
            Figure::Line { style, .. }
            | Figure::Polygon { style, .. }
            | Figure::Circle { style, .. }
            | Figure::Arc { style, .. }
            | Figure::Text { style, .. } => style,
        }
    }

    /// Whether the figure is drawn with an outline stroke (everything but text).
    pub fn is_stroked(&self) -> bool {
        !matches!(self, Figure::Text { .. })
    }

    /// Short kind name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Figure::Line { .. } => "line",
            Figure::Polygon { .. } => "polygon",
            Figure::Circle { .. } => "circle",
            Figure::Arc { .. } => "arc",
            Figure::Text { .. } => "text",
        }
    }
}
