//! The engine facade: the single entry point a host charting surface calls.
//!
//! `OverlayEngine` owns the catalog, the instance store, the selection and
//! every in-progress capture. All calls are synchronous and processed in the
//! order the host makes them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use overlaykit_core::{
    ExtraData, Figure, OverlayError, OverlayId, OverlayStyle, Point, Result, StrokeStyle,
    ThreadSafe,
};

use crate::capture::{CaptureHandle, CaptureState, PointCapture};
use crate::catalog::TemplateCatalog;
use crate::events::HostEvent;
use crate::projection::RenderEnv;
use crate::selection::{SelectionController, SelectionState};
use crate::store::{OverlayInstance, OverlayStore};
use crate::template::OverlayTemplate;

/// An engine shared across threads; the mutex serialises every mutation.
pub type SharedEngine = ThreadSafe<OverlayEngine>;

/// Engine-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Reported for fields a selected overlay does not override
    pub default_style: OverlayStyle,
    /// Templates that never become selected for editing
    pub selection_exclusions: Vec<String>,
    /// Inclusive `(min, max)` for thickness edits
    pub thickness_range: (f64, f64),
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_style: OverlayStyle::new()
                .with_color("#ff0000")
                .with_thickness(2.0)
                .with_stroke_style(StrokeStyle::Solid),
            selection_exclusions: vec!["segment".to_string(), "rayLine".to_string()],
            thickness_range: (1.0, 10.0),
        }
    }
}

/// Result of committing one point to a capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitOutcome {
    /// Live preview, or the placed overlay's figures once complete
    pub figures: Vec<Figure>,
    pub complete: bool,
    /// The created instance, once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<OverlayId>,
}

#[derive(Debug)]
pub struct OverlayEngine {
    catalog: TemplateCatalog,
    store: OverlayStore,
    selection: SelectionController,
    captures: HashMap<CaptureHandle, PointCapture>,
    next_handle: u64,
    options: EngineOptions,
}

impl Default for OverlayEngine {
    fn default() -> Self {
        Self::new(TemplateCatalog::new(), EngineOptions::default())
    }
}

impl OverlayEngine {
    pub fn new(catalog: TemplateCatalog, options: EngineOptions) -> Self {
        let selection = SelectionController::new(
            options.selection_exclusions.iter().cloned(),
            options.thickness_range,
            options.default_style.clone(),
        );
        Self {
            catalog,
            store: OverlayStore::new(),
            selection,
            captures: HashMap::new(),
            next_handle: 1,
            options,
        }
    }

    /// Engine with every built-in template and default options.
    pub fn with_builtins() -> Self {
        Self::new(TemplateCatalog::with_builtins(), EngineOptions::default())
    }

    pub fn register_template(&mut self, template: OverlayTemplate) -> Result<()> {
        self.catalog.register(template)
    }

    pub fn add_alias(&mut self, alias: impl Into<String>, target: impl Into<String>) {
        self.catalog.add_alias(alias, target);
    }

    /// Registered template names in registration order.
    pub fn list_template_names(&self) -> Vec<String> {
        self.catalog.names().map(str::to_string).collect()
    }

    /// Starts drawing a tool with no style overrides.
    pub fn begin_capture(&mut self, template_name: &str) -> Result<CaptureHandle> {
        self.begin_capture_with(template_name, OverlayStyle::new(), ExtraData::new())
    }

    /// Starts drawing a tool. `style` and `extra` are carried onto the
    /// instance created when the capture completes.
    pub fn begin_capture_with(
        &mut self,
        template_name: &str,
        style: OverlayStyle,
        extra: ExtraData,
    ) -> Result<CaptureHandle> {
        let template = self.catalog.resolve(template_name).inspect_err(|err| {
            warn!("Cannot begin capture: {}", err);
        })?;
        style.validate()?;

        let handle = CaptureHandle(self.next_handle);
        self.next_handle += 1;
        debug!("Capture {} started for '{}'", handle, template.name());
        self.captures
            .insert(handle, PointCapture::new(template, style, extra));
        Ok(handle)
    }

    /// Commits one anchor point.
    ///
    /// Returns the live preview while points are missing. On the final
    /// point the capture is consumed, an instance is created and its
    /// styled figures are returned.
    pub fn commit_point(
        &mut self,
        handle: CaptureHandle,
        point: Point,
        env: &RenderEnv<'_>,
    ) -> Result<CommitOutcome> {
        let Some(capture) = self.captures.get_mut(&handle) else {
            warn!("Commit to unknown capture {}", handle);
            return Err(OverlayError::UnknownCapture { handle: handle.0 });
        };
        let template = self.catalog.get(capture.template_name())?;

        if capture.commit(point) != CaptureState::Complete {
            return Ok(CommitOutcome {
                figures: capture.preview(template, env),
                complete: false,
                instance: None,
            });
        }

        let Some(capture) = self.captures.remove(&handle) else {
            return Err(OverlayError::UnknownCapture { handle: handle.0 });
        };
        let (name, points, style, extra) = capture.into_parts();
        let id = self
            .store
            .create(&self.catalog, &name, points, style, extra)?;
        debug!("Capture {} completed as overlay {}", handle, id);
        Ok(CommitOutcome {
            figures: self.store.render_figures(&self.catalog, id, env)?,
            complete: true,
            instance: Some(id),
        })
    }

    /// Discards a capture. Unknown handles are ignored.
    pub fn abort_capture(&mut self, handle: CaptureHandle) {
        match self.captures.remove(&handle) {
            Some(mut capture) => capture.abort(),
            None => debug!("Abort of unknown capture {} ignored", handle),
        }
    }

    /// State of an in-progress capture; `None` once completed or aborted.
    pub fn capture_state(&self, handle: CaptureHandle) -> Option<CaptureState> {
        self.captures.get(&handle).map(PointCapture::state)
    }

    /// Creates an instance directly from a complete point list.
    pub fn create_instance(
        &mut self,
        template_name: &str,
        points: Vec<Point>,
        style: OverlayStyle,
        extra: ExtraData,
    ) -> Result<OverlayId> {
        self.store
            .create(&self.catalog, template_name, points, style, extra)
            .inspect_err(|err| warn!("Cannot create '{}': {}", template_name, err))
    }

    /// Selects an instance by id, or clears the selection.
    ///
    /// An id that is not in the store clears the selection.
    pub fn set_selection(&mut self, id: Option<OverlayId>) -> SelectionState {
        let target = id.and_then(|id| self.store.get(id));
        match target {
            Some(instance) => self.selection.select(instance.id(), instance.template_name()),
            None => self.selection.clear(),
        }
    }

    /// Applies a host selection event.
    ///
    /// The target is looked up in the store and judged by its own template
    /// name; an id the store does not hold clears the selection.
    pub fn handle_event(&mut self, event: &HostEvent) -> SelectionState {
        match event.target() {
            Some((id, _)) => {
                debug!("Selection event: {} ({})", event.description(), id);
                self.set_selection(Some(id))
            }
            None => self.selection.handle_event(event),
        }
    }

    /// Merges a style delta into an instance. Absent ids are a no-op.
    pub fn update_instance_style(&mut self, id: OverlayId, delta: &OverlayStyle) -> Result<()> {
        self.store.update_style(id, delta)
    }

    pub fn set_instance_points(&mut self, id: OverlayId, points: Vec<Point>) -> Result<()> {
        self.store.set_points(id, points)
    }

    /// Removes an instance, clearing the selection if it was selected.
    pub fn remove_instance(&mut self, id: OverlayId) -> bool {
        if self.selection.selected_id() == Some(id) {
            self.selection.clear();
        }
        self.store.remove(id)
    }

    /// Figures of a placed instance, recomputed on every call.
    pub fn render_figures(&self, id: OverlayId, env: &RenderEnv<'_>) -> Result<Vec<Figure>> {
        self.store.render_figures(&self.catalog, id, env)
    }

    pub fn set_selected_color(&mut self, color: &str) -> Result<bool> {
        self.selection.set_color(&mut self.store, color)
    }

    pub fn set_selected_thickness(&mut self, thickness: f64) -> Result<Option<f64>> {
        self.selection.set_thickness(&mut self.store, thickness)
    }

    pub fn remove_selected(&mut self) -> bool {
        self.selection.remove(&mut self.store)
    }

    /// Effective style of the selected instance.
    pub fn selected_style(&self) -> Option<OverlayStyle> {
        self.selection.effective_style(&self.store)
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn instance(&self, id: OverlayId) -> Option<&OverlayInstance> {
        self.store.get(id)
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &OverlayStore {
        &self.store
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}
