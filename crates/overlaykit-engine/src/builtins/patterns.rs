//! Multi-point chart patterns.
//!
//! Patterns render progressively: the polyline grows with every click, the
//! optional fill appears once three points exist, and each captured point
//! gets its label. Previews start from the first point.

use overlaykit_core::{FigureStyle, FillMode, Figure, Point};

use crate::template::{FigureGenerator, GenerateContext, OverlayTemplate};

pub const XABCD: &str = "xabcdPattern";
pub const CYPHER: &str = "cypherPattern";
pub const ABCD: &str = "abcdPattern";
pub const TRIANGLE_PATTERN: &str = "trianglePattern";
pub const THREE_DRIVES: &str = "threeDrives";
pub const ELLIOTT_WAVE: &str = "elliottWave";
pub const ELLIOTT_IMPULSE: &str = "elliottImpulse";
pub const ELLIOTT_CORRECTION: &str = "elliottCorrection";
pub const HEAD_SHOULDERS: &str = "headShoulders";

const LINE_THICKNESS: f64 = 2.0;
const LABEL_FONT_SIZE: f64 = 12.0;
const FILL_OPACITY: f64 = 0.2;

const HEAD_SHOULDERS_COLOR: &str = "#854d0e";
const HEAD_SHOULDERS_LABELS: [&str; 5] = ["LS", "H", "RS", "NL1", "NL2"];

/// Shape of a labelled pattern. The label count is the point count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternSpec {
    pub labels: &'static [&'static str],
    pub color: &'static str,
    pub close_shape: bool,
}

const PATTERNS: [(&str, PatternSpec); 8] = [
    (
        XABCD,
        PatternSpec {
            labels: &["X", "A", "B", "C", "D"],
            color: "#e11d48",
            close_shape: true,
        },
    ),
    (
        CYPHER,
        PatternSpec {
            labels: &["X", "A", "B", "C", "D"],
            color: "#f97316",
            close_shape: true,
        },
    ),
    (
        ABCD,
        PatternSpec {
            labels: &["A", "B", "C", "D"],
            color: "#2563eb",
            close_shape: true,
        },
    ),
    (
        TRIANGLE_PATTERN,
        PatternSpec {
            labels: &["A", "B", "C"],
            color: "#16a34a",
            close_shape: true,
        },
    ),
    (
        THREE_DRIVES,
        PatternSpec {
            labels: &["1", "2", "3", "4"],
            color: "#9333ea",
            close_shape: false,
        },
    ),
    (
        ELLIOTT_WAVE,
        PatternSpec {
            labels: &["1", "2", "3", "4", "5"],
            color: "#0ea5e9",
            close_shape: false,
        },
    ),
    (
        ELLIOTT_IMPULSE,
        PatternSpec {
            labels: &["1", "2", "3", "4", "5"],
            color: "#f43f5e",
            close_shape: false,
        },
    ),
    (
        ELLIOTT_CORRECTION,
        PatternSpec {
            labels: &["A", "B", "C"],
            color: "#0891b2",
            close_shape: false,
        },
    ),
];

/// Generic labelled-pattern generator.
#[derive(Debug, Clone, Copy)]
pub struct PatternGenerator {
    spec: PatternSpec,
}

impl PatternGenerator {
    pub fn new(spec: PatternSpec) -> Self {
        Self { spec }
    }
}

impl FigureGenerator for PatternGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>) -> Vec<Figure> {
        let spec = &self.spec;
        let points: Vec<Point> = ctx.points.iter().map(|p| Point::new(p.x, p.y)).collect();
        let mut figures = Vec::new();

        if points.len() >= 2 {
            figures.push(Figure::line(points.clone()).styled(line_style(spec.color)));
        }
        if spec.close_shape && points.len() >= 3 {
            figures.push(
                Figure::polygon(points.clone()).styled(
                    FigureStyle::new()
                        .color(spec.color)
                        .fill(FillMode::StrokeFill, FILL_OPACITY),
                ),
            );
        }
        figures.extend(labels(&points, spec.labels, spec.color));
        figures
    }
}

pub fn templates() -> Vec<OverlayTemplate> {
    let mut templates: Vec<OverlayTemplate> = PATTERNS
        .iter()
        .map(|(name, spec)| {
            OverlayTemplate::new(*name, spec.labels.len(), PatternGenerator::new(*spec))
                .with_preview_min(1)
        })
        .collect();
    templates.push(
        OverlayTemplate::new(HEAD_SHOULDERS, HEAD_SHOULDERS_LABELS.len(), head_shoulders)
            .with_preview_min(1),
    );
    templates
}

fn line_style(color: &str) -> FigureStyle {
    FigureStyle::new().color(color).thickness(LINE_THICKNESS)
}

fn labels<'a>(
    points: &'a [Point],
    names: &'a [&'a str],
    color: &'a str,
) -> impl Iterator<Item = Figure> + 'a {
    points.iter().zip(names).map(move |(p, name)| {
        Figure::text(*p, *name).styled(FigureStyle::new().color(color).font_size(LABEL_FONT_SIZE))
    })
}

/// Shoulders and head as one polyline; the neckline joins the fourth
/// point to the fifth (a zero-length stub until the fifth exists).
fn head_shoulders(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let points: Vec<Point> = ctx.points.iter().map(|p| Point::new(p.x, p.y)).collect();
    let n = points.len();
    let mut figures = Vec::new();

    if n >= 2 {
        figures.push(
            Figure::line(points[..n.min(3)].to_vec()).styled(line_style(HEAD_SHOULDERS_COLOR)),
        );
    }
    if n >= 4 {
        let neckline_end = points.get(4).copied().unwrap_or(points[3]);
        figures.push(
            Figure::segment(points[3], neckline_end).styled(line_style(HEAD_SHOULDERS_COLOR)),
        );
    }
    figures.extend(labels(&points, &HEAD_SHOULDERS_LABELS, HEAD_SHOULDERS_COLOR));
    figures
}
