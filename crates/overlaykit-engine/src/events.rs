//! Host-reported interaction events consumed by the selection controller.

use serde::{Deserialize, Serialize};

use overlaykit_core::OverlayId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The user clicked an existing overlay
    OverlaySelected { id: OverlayId, name: String },
    /// The user finished drawing an overlay
    DrawCompleted { id: OverlayId, name: String },
    /// The user clicked away from every overlay
    Deselected,
}

impl HostEvent {
    /// The overlay the event refers to, with its template name.
    pub fn target(&self) -> Option<(OverlayId, &str)> {
        match self {
            HostEvent::OverlaySelected { id, name } | HostEvent::DrawCompleted { id, name } => {
                Some((*id, name.as_str()))
            }
            HostEvent::Deselected => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HostEvent::OverlaySelected { .. } => "overlay selected",
            HostEvent::DrawCompleted { .. } => "draw completed",
            HostEvent::Deselected => "deselected",
        }
    }
}
