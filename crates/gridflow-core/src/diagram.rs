//! Diagram model types.
//!
//! This module provides the value types that make up an activity diagram and
//! that the rendering layer reads back from the editor:
//!
//! - [`Node`]: a typed activity placed on a grid cell
//! - [`Edge`]: a directed connection between two node identities
//! - [`ConnectionPreview`]: the pending connection drawn while the user picks a target

use serde::{Deserialize, Serialize};

use crate::{
    activity::ActivityKind,
    geometry::{GridCell, Point},
    identifier::NodeId,
};

/// An activity node placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    kind: ActivityKind,
    #[serde(flatten)]
    cell: GridCell,
}

impl Node {
    /// Creates a node with the given identity and kind at `cell`.
    pub fn new(id: NodeId, kind: ActivityKind, cell: GridCell) -> Self {
        Self { id, kind, cell }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Returns the grid cell the node occupies.
    pub fn cell(&self) -> GridCell {
        self.cell
    }

    pub fn col(&self) -> u32 {
        self.cell.col()
    }

    pub fn row(&self) -> u32 {
        self.cell.row()
    }

    /// Returns a copy of this node relocated to `cell`.
    pub fn with_cell(mut self, cell: GridCell) -> Self {
        self.cell = cell;
        self
    }
}

/// A directed edge between two nodes.
///
/// # Examples
///
/// ```
/// use gridflow_core::{diagram::Edge, identifier::NodeId};
///
/// let edge = Edge::new(NodeId::new(2), NodeId::new(3));
/// assert!(edge.is_incident_to(NodeId::new(3)));
/// assert!(!edge.is_incident_to(NodeId::new(4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
}

impl Edge {
    /// Creates an edge from `from` to `to`.
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    /// Returns the source node identity
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// Returns the target node identity
    pub fn to(&self) -> NodeId {
        self.to
    }

    /// Returns true if `id` is either endpoint of this edge.
    pub fn is_incident_to(&self, id: NodeId) -> bool {
        self.from == id || self.to == id
    }
}

/// The pending connection exposed to the rendering layer while armed.
///
/// `point` is the last pointer position over the surface, or `None` when the
/// pointer has not moved yet or has left the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPreview {
    source: NodeId,
    point: Option<Point>,
}

impl ConnectionPreview {
    pub fn new(source: NodeId, point: Option<Point>) -> Self {
        Self { source, point }
    }

    /// Returns the node the pending connection starts from
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the live preview endpoint, if any
    pub fn point(&self) -> Option<Point> {
        self.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let node = Node::new(NodeId::new(1), ActivityKind::Start, GridCell::new(1, 2));

        assert_eq!(node.id(), NodeId::new(1));
        assert_eq!(node.kind(), ActivityKind::Start);
        assert_eq!(node.cell(), GridCell::new(1, 2));
        assert_eq!((node.col(), node.row()), (1, 2));
    }

    #[test]
    fn test_node_with_cell_keeps_identity() {
        let node = Node::new(NodeId::new(4), ActivityKind::Recv, GridCell::new(0, 0));
        let moved = node.with_cell(GridCell::new(5, 3));

        assert_eq!(moved.id(), node.id());
        assert_eq!(moved.kind(), node.kind());
        assert_eq!(moved.cell(), GridCell::new(5, 3));
    }

    #[test]
    fn test_edge_incidence() {
        let edge = Edge::new(NodeId::new(7), NodeId::new(3));

        assert_eq!(edge.from(), NodeId::new(7));
        assert_eq!(edge.to(), NodeId::new(3));
        assert!(edge.is_incident_to(NodeId::new(7)));
        assert!(edge.is_incident_to(NodeId::new(3)));
        assert!(!edge.is_incident_to(NodeId::new(5)));
    }

    #[test]
    fn test_preview_point_is_optional() {
        let preview = ConnectionPreview::new(NodeId::new(2), None);
        assert_eq!(preview.source(), NodeId::new(2));
        assert_eq!(preview.point(), None);

        let preview = ConnectionPreview::new(NodeId::new(2), Some(Point::new(1.0, 2.0)));
        assert_eq!(preview.point(), Some(Point::new(1.0, 2.0)));
    }
}
