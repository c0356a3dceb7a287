//! Decoded input events.
//!
//! The input transport layer turns raw pointer and drag-and-drop activity into
//! these closed types before handing them to the editor. Grid coordinates are
//! carried as signed integers so that the editor, not the transport, decides
//! whether a target lies on the surface.

use serde::{Deserialize, Serialize};

use crate::{activity::ActivityKind, geometry::Point, identifier::NodeId};

/// A request to place a new node or move an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementRequest {
    /// Drop of a palette entry: always creates a new node.
    FromPalette { kind: ActivityKind, col: i64, row: i64 },
    /// Drop of a node already on the canvas: relocates it.
    FromCanvas { node: NodeId, col: i64, row: i64 },
}

impl PlacementRequest {
    /// Returns the signed target coordinates of the drop.
    pub fn target(&self) -> (i64, i64) {
        match *self {
            PlacementRequest::FromPalette { col, row, .. }
            | PlacementRequest::FromCanvas { col, row, .. } => (col, row),
        }
    }
}

/// A single decoded input event, in the order the transport delivers them.
///
/// The serialized form is internally tagged by `type`:
///
/// ```
/// use gridflow_core::{event::EditorEvent, identifier::NodeId};
///
/// let event = EditorEvent::NodeClicked { node: NodeId::new(3) };
/// assert_eq!(event.name(), "click");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEvent {
    /// A palette entry was dropped on grid cell `(col, row)`.
    PaletteDrop { kind: ActivityKind, col: i64, row: i64 },
    /// A canvas node was dropped on grid cell `(col, row)`.
    #[serde(rename = "canvas_drop")]
    CanvasNodeDrop { node: NodeId, col: i64, row: i64 },
    /// The connection handle of a node was activated.
    #[serde(rename = "arm")]
    ArmConnection { node: NodeId },
    /// The pointer moved over the surface.
    PointerMove(Point),
    /// The pointer left the surface.
    PointerLeave,
    /// A node was clicked.
    #[serde(rename = "click")]
    NodeClicked { node: NodeId },
}

impl EditorEvent {
    /// Returns the wire name of the event's `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            EditorEvent::PaletteDrop { .. } => "palette_drop",
            EditorEvent::CanvasNodeDrop { .. } => "canvas_drop",
            EditorEvent::ArmConnection { .. } => "arm",
            EditorEvent::PointerMove(_) => "pointer_move",
            EditorEvent::PointerLeave => "pointer_leave",
            EditorEvent::NodeClicked { .. } => "click",
        }
    }
}

impl From<PlacementRequest> for EditorEvent {
    fn from(request: PlacementRequest) -> Self {
        match request {
            PlacementRequest::FromPalette { kind, col, row } => {
                EditorEvent::PaletteDrop { kind, col, row }
            }
            PlacementRequest::FromCanvas { node, col, row } => {
                EditorEvent::CanvasNodeDrop { node, col, row }
            }
        }
    }
}
