//! OverlayKit Settings Crate
//!
//! Engine configuration: default overlay style, selection rules and
//! catalog setup, stored as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{CatalogSettings, Config, SelectionSettings, StyleSettings};
pub use error::{Result, SettingsError};
