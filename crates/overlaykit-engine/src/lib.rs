//! # OverlayKit Engine
//!
//! Geometry engine behind chart drawing tools. A tool is an
//! [`OverlayTemplate`]: how many anchor points it needs and a pure function
//! that turns the points captured so far into renderable [`Figure`]s.
//!
//! ## Core Components
//!
//! - **Catalog**: registry of templates by unique name, plus fallback aliases
//! - **Built-ins**: shapes, position, fibonacci, straight-line and pattern tools
//! - **Capture**: per-tool state machine accumulating anchor clicks
//! - **Store**: placed overlays with identity, points, style and extra data
//! - **Selection**: which overlay is being edited, and the edit operations
//!
//! ## Data flow
//!
//! ```text
//! host pointer events ─▶ PointCapture ─▶ OverlayTemplate::generate ─▶ Vec<Figure>
//!                              │
//!                              └─ complete ─▶ OverlayStore ─▶ render_figures
//! host selection events ─▶ SelectionController ─▶ OverlayStore (style / remove)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use overlaykit_engine::{OverlayEngine, RenderEnv};
//! use overlaykit_core::{Bounding, Point};
//!
//! let mut engine = OverlayEngine::with_builtins();
//! let env = RenderEnv::new(Bounding::new(0.0, 0.0, 800.0, 400.0));
//!
//! let handle = engine.begin_capture("fibCircles")?;
//! engine.commit_point(handle, Point::new(100.0, 100.0), &env)?;
//! let outcome = engine.commit_point(handle, Point::new(200.0, 100.0), &env)?;
//! assert!(outcome.complete);
//! ```

pub mod builtins;
pub mod capture;
pub mod catalog;
pub mod engine;
pub mod events;
pub mod projection;
pub mod selection;
pub mod store;
pub mod template;

pub use overlaykit_core::{Figure, OverlayError, OverlayId, OverlayStyle, Point, Result};

pub use capture::{CaptureHandle, CaptureState, PointCapture};
pub use catalog::TemplateCatalog;
pub use engine::{CommitOutcome, EngineOptions, OverlayEngine, SharedEngine};
pub use events::HostEvent;
pub use projection::{AxisProjector, LinearProjector, RenderEnv};
pub use selection::{SelectionController, SelectionState};
pub use store::{OverlayInstance, OverlayStore};
pub use template::{FigureGenerator, GenerateContext, OverlayTemplate};
