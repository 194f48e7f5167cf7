//! Configuration for OverlayKit
//!
//! Settings are organized into sections:
//! - Styles (default overlay colour, thickness, stroke)
//! - Selection (templates excluded from editing, thickness range)
//! - Catalog (built-in registration, fallback aliases)
//!
//! Files are JSON or TOML, chosen by extension. The default location is
//! `<platform config dir>/overlaykit/config.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use overlaykit_core::{OverlayStyle, StrokeStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, SettingsError};

/// Default style of new overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub color: String,
    pub thickness: f64,
    pub stroke_style: StrokeStyle,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            color: "#ff0000".to_string(),
            thickness: 2.0,
            stroke_style: StrokeStyle::Solid,
        }
    }
}

impl StyleSettings {
    pub fn to_overlay_style(&self) -> OverlayStyle {
        OverlayStyle::new()
            .with_color(self.color.clone())
            .with_thickness(self.thickness)
            .with_stroke_style(self.stroke_style)
    }
}

/// Selection/edit rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// Template names that never become selected for editing
    pub excluded_templates: Vec<String>,
    pub min_thickness: f64,
    pub max_thickness: f64,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            excluded_templates: vec!["segment".to_string(), "rayLine".to_string()],
            min_thickness: 1.0,
            max_thickness: 10.0,
        }
    }
}

/// Template catalog setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub register_builtins: bool,
    /// Requested name -> registered name, used when the requested name is
    /// not registered itself
    pub aliases: BTreeMap<String, String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        let aliases = [
            ("fibonacciExtension", "fibExtensionCustom"),
            ("fibonacciChannel", "fibChannelCustom"),
            ("fibonacciTimeLine", "fibTimeZoneCustom"),
            ("fibonacciFanLine", "fibFanCustom"),
        ]
        .into_iter()
        .map(|(a, t)| (a.to_string(), t.to_string()))
        .collect();
        Self {
            register_builtins: true,
            aliases,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub styles: StyleSettings,
    pub selection: SelectionSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("overlaykit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.styles.color.trim().is_empty() {
            return Err(SettingsError::invalid("styles.color", "must not be empty"));
        }

        let (min, max) = (self.selection.min_thickness, self.selection.max_thickness);
        if !min.is_finite() || min <= 0.0 {
            return Err(SettingsError::invalid(
                "selection.min_thickness",
                format!("must be > 0, got {}", min),
            ));
        }
        if !max.is_finite() || max < min {
            return Err(SettingsError::invalid(
                "selection.max_thickness",
                format!("must be >= min_thickness ({}), got {}", min, max),
            ));
        }
        if !(min..=max).contains(&self.styles.thickness) {
            return Err(SettingsError::invalid(
                "styles.thickness",
                format!("{} is outside {}..={}", self.styles.thickness, min, max),
            ));
        }

        for (alias, target) in &self.catalog.aliases {
            if alias == target {
                return Err(SettingsError::invalid(
                    format!("catalog.aliases.{}", alias),
                    "alias points to itself",
                ));
            }
        }
        Ok(())
    }
}
