//! # OverlayKit
//!
//! Geometry engine for chart drawing tools. A host charting surface reports
//! pointer clicks and selection changes; OverlayKit turns them into
//! renderable figures (lines, polygons, circles, arcs, text) and keeps the
//! placed overlays editable.
//!
//! ## Architecture
//!
//! OverlayKit is organized as a workspace with multiple crates:
//!
//! 1. **overlaykit-core** - Points, figures, styles, geometry primitives, errors
//! 2. **overlaykit-engine** - Template catalog, built-in tools, point capture,
//!    instance store, selection controller
//! 3. **overlaykit-settings** - Engine configuration (JSON/TOML)
//! 4. **overlaykit** - Integration crate and the `overlaykit` replay binary
//!
//! ## Features
//!
//! - **Shapes**: rectangle, rotated rectangle, circle, triangle
//! - **Trading tools**: risk/reward position with long/short side
//! - **Fibonacci**: circles, spiral, arcs, wedge, fan, extension, time zones,
//!   channel, retracement
//! - **Lines**: trend angle, cross line, flat top/bottom, regression trend,
//!   rays, straight, horizontal/vertical, parallel and price channels
//! - **Patterns**: XABCD, cypher, ABCD, triangle, three drives, Elliott,
//!   head and shoulders

pub mod replay;

pub use overlaykit_core::{
    Bounding, Candle, ExtraData, FibRatio, Figure, FigureStyle, OverlayError, OverlayId,
    OverlayStyle, Point, StrokeStyle,
};
pub use overlaykit_engine::{
    builtins, AxisProjector, CaptureHandle, CaptureState, CommitOutcome, EngineOptions,
    HostEvent, LinearProjector, OverlayEngine, OverlayTemplate, RenderEnv, SelectionState,
    SharedEngine, TemplateCatalog,
};
pub use overlaykit_settings::{Config, SettingsError};

use anyhow::Context;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays free for figure output
/// - RUST_LOG environment variable support, `info` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_names(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("logging already initialized")?;

    Ok(())
}

/// Engine options described by a config.
pub fn engine_options(config: &Config) -> EngineOptions {
    EngineOptions {
        default_style: config.styles.to_overlay_style(),
        selection_exclusions: config.selection.excluded_templates.clone(),
        thickness_range: (
            config.selection.min_thickness,
            config.selection.max_thickness,
        ),
    }
}

/// Builds an engine from a validated config: built-ins when enabled, the
/// configured aliases, selection rules and default style.
pub fn build_engine(config: &Config) -> anyhow::Result<OverlayEngine> {
    config.validate().context("invalid configuration")?;

    let mut catalog = TemplateCatalog::new();
    if config.catalog.register_builtins {
        builtins::register_builtins(&mut catalog).context("registering built-in templates")?;
    }
    for (alias, target) in &config.catalog.aliases {
        catalog.add_alias(alias.clone(), target.clone());
    }

    tracing::info!(
        "Engine ready: {} templates, {} aliases",
        catalog.len(),
        config.catalog.aliases.len()
    );
    Ok(OverlayEngine::new(catalog, engine_options(config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_engine_defaults() {
        let engine = build_engine(&Config::default()).unwrap();
        assert_eq!(engine.list_template_names().len(), builtins::BUILTIN_NAMES.len());
        assert!(engine.catalog().resolve("fibonacciChannel").is_ok());
        assert_eq!(engine.options().thickness_range, (1.0, 10.0));
    }

    #[test]
    fn test_build_engine_without_builtins() {
        let mut config = Config::default();
        config.catalog.register_builtins = false;
        let engine = build_engine(&config).unwrap();
        assert!(engine.catalog().is_empty());
        // aliases are kept even when their targets are missing
        assert!(matches!(
            engine.catalog().resolve("fibonacciFanLine"),
            Err(OverlayError::UnresolvedAlias { .. })
        ));
    }

    #[test]
    fn test_build_engine_rejects_invalid_config() {
        let mut config = Config::default();
        config.selection.max_thickness = 0.5;
        assert!(build_engine(&config).is_err());
    }

    #[test]
    fn test_engine_options_from_config() {
        let mut config = Config::default();
        config.selection.excluded_templates = vec!["priceLine".to_string()];
        let options = engine_options(&config);
        assert_eq!(options.selection_exclusions, vec!["priceLine"]);
        assert_eq!(options.default_style.color.as_deref(), Some("#ff0000"));
    }
}
