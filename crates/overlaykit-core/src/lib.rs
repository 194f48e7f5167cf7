//! # OverlayKit Core
//!
//! Core value types, geometry primitives and the error taxonomy shared by the
//! OverlayKit crates. Nothing in here holds state: points, figures and styles
//! are plain values, and the geometry functions are pure.

pub mod error;
pub mod fibonacci;
pub mod figure;
pub mod geometry;
pub mod series;
pub mod style;
pub mod types;

pub use error::{OverlayError, Result};

pub use fibonacci::{FibRatio, FIB_TIME_SEQUENCE};

pub use figure::{FillMode, Figure, FigureStyle, StrokeStyle, TextAlign, TextBaseline};

pub use geometry::{
    angle_degrees, distance, lerp, least_squares_fit, rotate_point, Bounding, LinearFit, Point,
};

pub use series::Candle;

pub use style::{ExtraData, OverlayId, OverlayStyle};

pub use types::{shared, thread_safe, Shared, ThreadSafe};
