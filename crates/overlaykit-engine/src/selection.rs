use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use overlaykit_core::{OverlayId, OverlayStyle, Result};

use crate::events::HostEvent;
use crate::store::OverlayStore;

/// Thickness range used when a configured range is unusable.
pub const DEFAULT_THICKNESS_RANGE: (f64, f64) = (1.0, 10.0);

/// Which overlay, if any, is open for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum SelectionState {
    #[default]
    NoSelection,
    Selected(OverlayId),
}

impl SelectionState {
    pub fn selected_id(&self) -> Option<OverlayId> {
        match self {
            SelectionState::Selected(id) => Some(*id),
            SelectionState::NoSelection => None,
        }
    }
}

/// Tracks the selected overlay and edits it.
///
/// `SelectionController` is responsible for:
/// - Following host selection events (`OverlaySelected`, `DrawCompleted`,
///   `Deselected`)
/// - Refusing to select templates in the exclusion set
/// - Editing colour and thickness of the selected overlay
/// - Removing the selected overlay
///
/// # Selection Model
///
/// The controller holds a non-owning id; the instance itself stays in the
/// [`OverlayStore`]. Every edit goes through the store, so an id that has
/// since been removed turns edits into no-ops.
///
/// # Examples
///
/// ```
/// use overlaykit_engine::selection::{SelectionController, SelectionState};
/// use overlaykit_core::OverlayId;
///
/// let mut selection = SelectionController::default();
/// let id = OverlayId::new();
/// assert_eq!(selection.select(id, "circle"), SelectionState::Selected(id));
/// assert_eq!(selection.select(id, "segment"), SelectionState::NoSelection);
/// ```
#[derive(Debug, Clone)]
pub struct SelectionController {
    state: SelectionState,
    excluded: HashSet<String>,
    thickness_range: (f64, f64),
    default_style: OverlayStyle,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(
            ["segment", "rayLine"],
            DEFAULT_THICKNESS_RANGE,
            OverlayStyle::new().with_color("#ff0000").with_thickness(2.0),
        )
    }
}

impl SelectionController {
    /// Creates a controller with no selection.
    ///
    /// # Arguments
    ///
    /// * `excluded` - Template names that never become selected
    /// * `thickness_range` - Inclusive `(min, max)` that `set_thickness` clamps into.
    ///   Inverted bounds are swapped; a NaN bound falls back to
    ///   [`DEFAULT_THICKNESS_RANGE`].
    /// * `default_style` - Style reported for fields an instance does not override
    pub fn new<I, S>(excluded: I, thickness_range: (f64, f64), default_style: OverlayStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: SelectionState::NoSelection,
            excluded: excluded.into_iter().map(Into::into).collect(),
            thickness_range: ordered_range(thickness_range),
            default_style,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selected_id(&self) -> Option<OverlayId> {
        self.state.selected_id()
    }

    pub fn is_excluded(&self, template_name: &str) -> bool {
        self.excluded.contains(template_name)
    }

    pub fn thickness_range(&self) -> (f64, f64) {
        self.thickness_range
    }

    /// Applies a host event.
    ///
    /// Selection and draw-completion events select the overlay unless its
    /// template is excluded; `Deselected` always clears.
    pub fn handle_event(&mut self, event: &HostEvent) -> SelectionState {
        debug!("Selection event: {}", event.description());
        match event.target() {
            Some((id, name)) => self.select(id, name),
            None => self.clear(),
        }
    }

    /// Selects `id`, or clears the selection if `template_name` is excluded.
    pub fn select(&mut self, id: OverlayId, template_name: &str) -> SelectionState {
        self.state = if self.is_excluded(template_name) {
            debug!("'{}' is excluded from editing", template_name);
            SelectionState::NoSelection
        } else {
            SelectionState::Selected(id)
        };
        self.state
    }

    pub fn clear(&mut self) -> SelectionState {
        self.state = SelectionState::NoSelection;
        self.state
    }

    /// Sets the colour of the selected overlay.
    ///
    /// # Returns
    ///
    /// `true` if an overlay was selected, `false` if there was nothing to edit.
    pub fn set_color(&self, store: &mut OverlayStore, color: &str) -> Result<bool> {
        let Some(id) = self.selected_id() else {
            return Ok(false);
        };
        store.update_style(id, &OverlayStyle::new().with_color(color))?;
        Ok(true)
    }

    /// Sets the thickness of the selected overlay, clamped into the
    /// configured range.
    ///
    /// # Returns
    ///
    /// The thickness actually applied, or `None` without a selection.
    pub fn set_thickness(&self, store: &mut OverlayStore, thickness: f64) -> Result<Option<f64>> {
        let Some(id) = self.selected_id() else {
            return Ok(None);
        };
        let (min, max) = self.thickness_range;
        let clamped = if thickness.is_nan() {
            min
        } else {
            thickness.clamp(min, max)
        };
        store.update_style(id, &OverlayStyle::new().with_thickness(clamped))?;
        Ok(Some(clamped))
    }

    /// Removes the selected overlay and clears the selection.
    ///
    /// # Returns
    ///
    /// Whether an overlay was removed from the store.
    pub fn remove(&mut self, store: &mut OverlayStore) -> bool {
        let removed = match self.selected_id() {
            Some(id) => store.remove(id),
            None => false,
        };
        self.clear();
        removed
    }

    /// Style of the selected overlay with configured defaults filled in.
    pub fn effective_style(&self, store: &OverlayStore) -> Option<OverlayStyle> {
        let instance = store.get(self.selected_id()?)?;
        Some(instance.style().layered_over(&self.default_style))
    }
}

fn ordered_range((min, max): (f64, f64)) -> (f64, f64) {
    if min.is_nan() || max.is_nan() {
        warn!(
            "Thickness range ({}, {}) is not a number, using {:?}",
            min, max, DEFAULT_THICKNESS_RANGE
        );
        return DEFAULT_THICKNESS_RANGE;
    }
    (min.min(max), min.max(max))
}
