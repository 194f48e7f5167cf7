//! Error handling for OverlayKit
//!
//! One error enum covers every failure the engine can report to its host:
//! - Catalog errors (unknown names, duplicate registration, broken aliases)
//! - Instance errors (wrong number of anchor points, invalid style values)
//! - Capture errors (stale capture handles)
//! - Geometry errors (degenerate input, recovered inside templates)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Overlay engine error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverlayError {
    /// No template is registered under the requested name
    #[error("Unknown template: {name}")]
    UnknownTemplate {
        /// The requested template name.
        name: String,
    },

    /// The requested name is a fallback alias whose target is not registered
    #[error("Alias '{alias}' points to unregistered template '{target}'")]
    UnresolvedAlias {
        /// The alias that was requested.
        alias: String,
        /// The template name the alias maps to.
        target: String,
    },

    /// A template with this name is already registered
    #[error("Template '{name}' is already registered")]
    DuplicateName {
        /// The conflicting template name.
        name: String,
    },

    /// An instance was created with the wrong number of anchor points
    #[error("Template '{template}' requires {expected} points, got {actual}")]
    PointCountMismatch {
        /// The template name.
        template: String,
        /// The number of points the template requires.
        expected: usize,
        /// The number of points supplied.
        actual: usize,
    },

    /// The capture handle does not refer to an active capture
    #[error("Unknown capture handle: {handle}")]
    UnknownCapture {
        /// The stale or never-issued handle.
        handle: u64,
    },

    /// A style value is outside its valid domain
    #[error("Invalid style: {reason}")]
    InvalidStyle {
        /// Why the value was rejected.
        reason: String,
    },

    /// Input geometry admits no meaningful result (e.g. zero-width regression span)
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry {
        /// Description of the degenerate case.
        reason: String,
    },
}

impl OverlayError {
    /// Create an unknown-template error
    pub fn unknown_template(name: impl Into<String>) -> Self {
        Self::UnknownTemplate { name: name.into() }
    }

    /// Create a degenerate-geometry error
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    /// Create an invalid-style error
    pub fn invalid_style(reason: impl Into<String>) -> Self {
        Self::InvalidStyle {
            reason: reason.into(),
        }
    }
}

/// Result type alias for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;
