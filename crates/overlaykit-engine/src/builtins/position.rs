//! Risk/reward position tool.
//!
//! Three anchors in click order: entry, stop loss, take profit. Only the y
//! coordinates of stop and target matter; the drawing is centered on the
//! entry's x.

use overlaykit_core::{
    FigureStyle, FillMode, Figure, Point, StrokeStyle, TextAlign, TextBaseline,
};

use crate::template::{GenerateContext, OverlayTemplate};

pub const POSITION: &str = "position";

/// Half width of the entry line and bands
pub const HALF_WIDTH: f64 = 40.0;
const LABEL_GAP: f64 = 5.0;
const FONT_SIZE: f64 = 12.0;
const BAND_OPACITY: f64 = 0.25;

/// Trade direction, read from the `side` key of the instance's extra data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionSide {
    #[default]
    Long,
    Short,
}

impl PositionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionSide::Long => "long",
            PositionSide::Short => "short",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "long" => Some(PositionSide::Long),
            "short" => Some(PositionSide::Short),
            _ => None,
        }
    }

    fn entry_label(&self) -> &'static str {
        match self {
            PositionSide::Long => "Long Entry",
            PositionSide::Short => "Short Entry",
        }
    }
}

/// Reward-to-risk ratio as displayed: two decimals, or `∞` when the stop
/// sits exactly on the entry.
pub fn reward_risk_label(entry_y: f64, stop_y: f64, target_y: f64) -> String {
    let risk = (stop_y - entry_y).abs();
    let reward = (target_y - entry_y).abs();
    if risk == 0.0 {
        "∞".to_string()
    } else {
        format!("{:.2}", reward / risk)
    }
}

pub fn template() -> OverlayTemplate {
    OverlayTemplate::new(POSITION, 3, generate)
}

fn band(x_left: f64, x_right: f64, y_from: f64, y_to: f64, color: &str) -> Figure {
    Figure::polygon(vec![
        Point::new(x_left, y_from),
        Point::new(x_right, y_from),
        Point::new(x_right, y_to),
        Point::new(x_left, y_to),
    ])
    .styled(FigureStyle::new().color(color).fill(FillMode::Fill, BAND_OPACITY))
}

fn label(at: Point, content: impl Into<String>, align: TextAlign, color: &str) -> Figure {
    Figure::text(at, content)
        .aligned(align, TextBaseline::Middle)
        .styled(FigureStyle::new().color(color).font_size(FONT_SIZE))
}

fn generate(ctx: &GenerateContext<'_>) -> Vec<Figure> {
    let (Some(entry), Some(stop), Some(target)) = (ctx.point(0), ctx.point(1), ctx.point(2))
    else {
        return Vec::new();
    };
    let side = ctx
        .extra_str("side")
        .and_then(PositionSide::parse)
        .unwrap_or_default();

    let x_left = entry.x - HALF_WIDTH;
    let x_right = entry.x + HALF_WIDTH;
    let rr = reward_risk_label(entry.y, stop.y, target.y);

    vec![
        Figure::segment(Point::new(x_left, entry.y), Point::new(x_right, entry.y)).styled(
            FigureStyle::new()
                .color("blue")
                .stroke_style(StrokeStyle::Dashed),
        ),
        label(
            Point::new(x_left - LABEL_GAP, entry.y),
            side.entry_label(),
            TextAlign::Right,
            "blue",
        ),
        label(
            Point::new(x_right + LABEL_GAP, entry.y),
            format!("RRR {}", rr),
            TextAlign::Left,
            "#000",
        ),
        band(x_left, x_right, entry.y, stop.y, "#F4511E"),
        label(
            Point::new(x_left - LABEL_GAP, stop.y),
            "SL",
            TextAlign::Right,
            "red",
        ),
        band(x_left, x_right, entry.y, target.y, "#7CB342"),
        label(
            Point::new(x_left - LABEL_GAP, target.y),
            "TP",
            TextAlign::Right,
            "green",
        ),
    ]
}
