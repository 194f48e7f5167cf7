//! Scripted replay of host interactions.
//!
//! A script is the sequence of calls a charting surface would make: start a
//! tool, click anchor points, select, edit and remove overlays. Replaying it
//! against an [`OverlayEngine`] yields one JSON record per step, which makes
//! the engine drivable from the command line and from fixtures.

use std::path::Path;

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use overlaykit_core::{Bounding, Candle, ExtraData, OverlayId, OverlayStyle, Point};
use overlaykit_engine::{CaptureHandle, LinearProjector, OverlayEngine, RenderEnv};

/// A recorded host session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub bounding: Bounding,
    /// Visible series, used for price labels and regression fits
    #[serde(default)]
    pub series: Vec<Candle>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing script {}", path.display()))
    }
}

/// One host call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Start drawing with a tool; becomes the active capture
    Begin {
        template: String,
        #[serde(default)]
        style: Option<OverlayStyle>,
        #[serde(default)]
        extra: Option<ExtraData>,
    },
    /// Click on the active capture
    Commit {
        x: f64,
        y: f64,
        #[serde(default)]
        index: Option<usize>,
    },
    Abort,
    /// Select an overlay; without `id` the most recently created one
    Select {
        #[serde(default)]
        id: Option<OverlayId>,
    },
    Deselect,
    SetColor { color: String },
    SetThickness { thickness: f64 },
    RemoveSelected,
    /// Render every placed overlay
    Render,
}

impl Step {
    fn op(&self) -> &'static str {
        match self {
            Step::Begin { .. } => "begin",
            Step::Commit { .. } => "commit",
            Step::Abort => "abort",
            Step::Select { .. } => "select",
            Step::Deselect => "deselect",
            Step::SetColor { .. } => "set_color",
            Step::SetThickness { .. } => "set_thickness",
            Step::RemoveSelected => "remove_selected",
            Step::Render => "render",
        }
    }
}

struct Session {
    active: Option<CaptureHandle>,
    last_created: Option<OverlayId>,
}

/// Replays `script` against `engine`, one output record per step.
///
/// A failing step is reported as an `error` record and the replay goes on,
/// as a host would after showing the error.
pub fn run_script(engine: &mut OverlayEngine, script: &Script) -> anyhow::Result<Vec<Value>> {
    let projector = (!script.series.is_empty())
        .then(|| LinearProjector::fit(script.bounding, &script.series));
    let mut env = RenderEnv::new(script.bounding).with_series(&script.series);
    if let Some(projector) = projector.as_ref() {
        env = env.with_projector(projector);
    }

    let mut session = Session {
        active: None,
        last_created: None,
    };
    let mut records = Vec::with_capacity(script.steps.len());
    for (n, step) in script.steps.iter().enumerate() {
        let record = match apply(engine, &mut session, step, &env) {
            Ok(value) => value,
            Err(e) => {
                warn!("Step {} ({}) failed: {:#}", n, step.op(), e);
                json!({ "op": step.op(), "error": format!("{:#}", e) })
            }
        };
        records.push(record);
    }
    debug!("Replayed {} steps", records.len());
    Ok(records)
}

fn apply(
    engine: &mut OverlayEngine,
    session: &mut Session,
    step: &Step,
    env: &RenderEnv<'_>,
) -> anyhow::Result<Value> {
    let value = match step {
        Step::Begin {
            template,
            style,
            extra,
        } => {
            if let Some(previous) = session.active.take() {
                engine.abort_capture(previous);
            }
            let handle = engine.begin_capture_with(
                template,
                style.clone().unwrap_or_default(),
                extra.clone().unwrap_or_default(),
            )?;
            session.active = Some(handle);
            json!({ "op": "begin", "template": template, "handle": handle.0 })
        }
        Step::Commit { x, y, index } => {
            let handle = session
                .active
                .ok_or_else(|| anyhow!("no active capture"))?;
            let point = match index {
                Some(i) => Point::with_index(*x, *y, *i),
                None => Point::new(*x, *y),
            };
            let outcome = engine.commit_point(handle, point, env)?;
            if outcome.complete {
                session.active = None;
                session.last_created = outcome.instance;
            }
            json!({ "op": "commit", "outcome": outcome })
        }
        Step::Abort => {
            if let Some(handle) = session.active.take() {
                engine.abort_capture(handle);
            }
            json!({ "op": "abort" })
        }
        Step::Select { id } => {
            let target = id.or(session.last_created);
            let state = engine.set_selection(target);
            json!({ "op": "select", "selection": state })
        }
        Step::Deselect => {
            let state = engine.set_selection(None);
            json!({ "op": "deselect", "selection": state })
        }
        Step::SetColor { color } => {
            let applied = engine.set_selected_color(color)?;
            json!({ "op": "set_color", "applied": applied })
        }
        Step::SetThickness { thickness } => {
            let applied = engine.set_selected_thickness(*thickness)?;
            json!({ "op": "set_thickness", "applied": applied })
        }
        Step::RemoveSelected => {
            let removed = engine.remove_selected();
            json!({ "op": "remove_selected", "removed": removed })
        }
        Step::Render => {
            let ids: Vec<OverlayId> = engine.store().iter().map(|i| i.id()).collect();
            let mut overlays = Vec::with_capacity(ids.len());
            for id in ids {
                let figures = engine.render_figures(id, env)?;
                overlays.push(json!({ "id": id, "figures": figures }));
            }
            json!({ "op": "render", "overlays": overlays })
        }
    };
    Ok(value)
}
