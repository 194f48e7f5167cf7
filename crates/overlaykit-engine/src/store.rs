//! # Overlay Instance Store
//!
//! Owns every placed overlay. Figures are never stored: each
//! [`OverlayStore::render_figures`] call regenerates them from the instance's
//! template, points and style.
//!
//! Every operation either fully applies or leaves the store untouched.
//! Operations on an absent id (`update_style`, `set_points`, `remove`) are
//! silent no-ops so stale host references are tolerated.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use overlaykit_core::{ExtraData, Figure, OverlayError, OverlayId, OverlayStyle, Point, Result};

use crate::catalog::TemplateCatalog;
use crate::projection::RenderEnv;
use crate::template::GenerateContext;

/// A placed overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayInstance {
    id: OverlayId,
    template_name: String,
    points: Vec<Point>,
    style: OverlayStyle,
    #[serde(default, skip_serializing_if = "ExtraData::is_empty")]
    extra: ExtraData,
}

impl OverlayInstance {
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// Name of the template that generated the instance (after alias
    /// resolution).
    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Parameters fixed at creation; never changed afterwards.
    pub fn extra(&self) -> &ExtraData {
        &self.extra
    }
}

/// Placed overlays, in creation order.
#[derive(Debug, Clone, Default)]
pub struct OverlayStore {
    instances: HashMap<OverlayId, OverlayInstance>,
    draw_order: Vec<OverlayId>,
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an instance from a complete point list.
    ///
    /// # Errors
    /// - `UnknownTemplate` / `UnresolvedAlias` if the name does not resolve
    /// - `PointCountMismatch` if `points.len()` differs from the template's
    ///   required count
    /// - `InvalidStyle` if the style fails validation
    pub fn create(
        &mut self,
        catalog: &TemplateCatalog,
        template_name: &str,
        points: Vec<Point>,
        style: OverlayStyle,
        extra: ExtraData,
    ) -> Result<OverlayId> {
        let template = catalog.resolve(template_name)?;
        if points.len() != template.required_points() {
            return Err(OverlayError::PointCountMismatch {
                template: template.name().to_string(),
                expected: template.required_points(),
                actual: points.len(),
            });
        }
        style.validate()?;

        let id = OverlayId::new();
        let instance = OverlayInstance {
            id,
            template_name: template.name().to_string(),
            points,
            style,
            extra,
        };
        self.instances.insert(id, instance);
        self.draw_order.push(id);
        info!("Created overlay {} ('{}')", id, template.name());
        Ok(id)
    }

    pub fn get(&self, id: OverlayId) -> Option<&OverlayInstance> {
        self.instances.get(&id)
    }

    pub fn contains(&self, id: OverlayId) -> bool {
        self.instances.contains_key(&id)
    }

    /// Merges `delta` into the instance's style; fields `delta` leaves unset
    /// are preserved. An invalid delta is rejected before anything changes.
    pub fn update_style(&mut self, id: OverlayId, delta: &OverlayStyle) -> Result<()> {
        delta.validate()?;
        match self.instances.get_mut(&id) {
            Some(instance) => {
                instance.style.merge(delta);
                debug!("Updated style of overlay {}", id);
            }
            None => debug!("Style update for absent overlay {} ignored", id),
        }
        Ok(())
    }

    /// Replaces the instance's anchor points, e.g. after an anchor drag.
    /// The point count must stay the same.
    pub fn set_points(&mut self, id: OverlayId, points: Vec<Point>) -> Result<()> {
        let Some(instance) = self.instances.get_mut(&id) else {
            debug!("Point update for absent overlay {} ignored", id);
            return Ok(());
        };
        if points.len() != instance.points.len() {
            return Err(OverlayError::PointCountMismatch {
                template: instance.template_name.clone(),
                expected: instance.points.len(),
                actual: points.len(),
            });
        }
        instance.points = points;
        debug!("Moved anchors of overlay {}", id);
        Ok(())
    }

    /// Removes an instance. Returns whether anything was removed.
    pub fn remove(&mut self, id: OverlayId) -> bool {
        match self.instances.remove(&id) {
            Some(instance) => {
                self.draw_order.retain(|other| *other != id);
                info!(
                    "Removed overlay {} ('{}')",
                    id,
                    instance.template_name()
                );
                true
            }
            None => {
                debug!("Remove of absent overlay {} ignored", id);
                false
            }
        }
    }

    /// Regenerates the instance's figures and applies its style: colour,
    /// thickness and stroke style to stroked figures, colour to text.
    ///
    /// Returns an empty list for an absent id.
    pub fn render_figures(
        &self,
        catalog: &TemplateCatalog,
        id: OverlayId,
        env: &RenderEnv<'_>,
    ) -> Result<Vec<Figure>> {
        let Some(instance) = self.instances.get(&id) else {
            return Ok(Vec::new());
        };
        let template = catalog.get(&instance.template_name)?;
        let ctx = GenerateContext::new(&instance.points, env, &instance.extra);
        let mut figures = template.generate(&ctx);
        apply_style(&mut figures, &instance.style);
        Ok(figures)
    }

    /// Instances in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &OverlayInstance> {
        self.draw_order
            .iter()
            .filter_map(move |id| self.instances.get(id))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.draw_order.clear();
    }
}

fn apply_style(figures: &mut [Figure], style: &OverlayStyle) {
    if style.is_empty() {
        return;
    }
    for figure in figures {
        let stroked = figure.is_stroked();
        let target = figure.style_mut();
        if let Some(color) = &style.color {
            target.color = Some(color.clone());
        }
        if stroked {
            if let Some(thickness) = style.thickness {
                target.thickness = Some(thickness);
            }
            if let Some(stroke_style) = style.stroke_style {
                target.stroke_style = Some(stroke_style);
            }
        }
    }
}
