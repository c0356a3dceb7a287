//! Results of editing operations.
//!
//! Editing never fails. Every handler reports what it did through one of the
//! outcome types below; input that could not be applied comes back as an
//! `Ignored` outcome carrying an [`IgnoreReason`], with the diagram unchanged.

use std::fmt;

use gridflow_core::{
    diagram::{Edge, Node},
    geometry::GridCell,
    identifier::NodeId,
};

/// Why an input event was absorbed without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The target cell lies outside the surface.
    OutOfBounds { col: i64, row: i64 },
    /// The event names a node that does not exist.
    UnknownNode(NodeId),
    /// The event needs an armed connection but none is pending.
    NotArmed,
    /// The clicked connection target does not exist.
    UnknownTarget(NodeId),
    /// The armed source was destroyed before the connection was committed.
    SourceGone(NodeId),
    /// The pointer position does not map to a grid cell.
    Unmappable,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::OutOfBounds { col, row } => {
                write!(f, "cell ({col}, {row}) is outside the surface")
            }
            IgnoreReason::UnknownNode(id) => write!(f, "node {id} does not exist"),
            IgnoreReason::NotArmed => write!(f, "no connection is armed"),
            IgnoreReason::UnknownTarget(id) => write!(f, "target node {id} does not exist"),
            IgnoreReason::SourceGone(id) => write!(f, "armed source node {id} no longer exists"),
            IgnoreReason::Unmappable => write!(f, "position does not map to a grid cell"),
        }
    }
}

/// A node destroyed by a colliding placement, with the edges that went with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eviction {
    node: Node,
    edges: Vec<Edge>,
}

impl Eviction {
    pub(crate) fn new(node: Node, edges: Vec<Edge>) -> Self {
        Self { node, edges }
    }

    /// Returns the evicted node.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Returns the edges removed because they touched the evicted node.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// What a placement request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// A new node was placed on a free cell.
    Created { node: Node },
    /// A new node was placed on an occupied cell, evicting its occupant.
    Replaced { node: Node, eviction: Eviction },
    /// An existing node was moved from `from` to its current cell.
    Moved {
        node: Node,
        from: GridCell,
        eviction: Option<Eviction>,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl PlacementOutcome {
    /// Returns the placed or moved node, unless the request was ignored.
    pub fn node(&self) -> Option<&Node> {
        match self {
            PlacementOutcome::Created { node }
            | PlacementOutcome::Replaced { node, .. }
            | PlacementOutcome::Moved { node, .. } => Some(node),
            PlacementOutcome::Ignored(_) => None,
        }
    }

    /// Returns the eviction this placement caused, if any.
    pub fn eviction(&self) -> Option<&Eviction> {
        match self {
            PlacementOutcome::Replaced { eviction, .. } => Some(eviction),
            PlacementOutcome::Moved { eviction, .. } => eviction.as_ref(),
            PlacementOutcome::Created { .. } | PlacementOutcome::Ignored(_) => None,
        }
    }

    /// Returns true if the placement left both stores unchanged.
    pub fn is_ignored(&self) -> bool {
        matches!(self, PlacementOutcome::Ignored(_))
    }
}

/// What a connection event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectionOutcome {
    /// A source was armed; `discarded` is the previously armed source, if any.
    Armed {
        source: NodeId,
        discarded: Option<NodeId>,
    },
    /// The preview endpoint moved.
    PreviewUpdated,
    /// The preview endpoint was cleared.
    PreviewCleared,
    /// The source itself was clicked; no edge was created.
    Cancelled { source: NodeId },
    /// An edge was created, replacing the source's previous outgoing edge if any.
    Committed { edge: Edge, replaced: Option<Edge> },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl ConnectionOutcome {
    /// Returns true if the event changed neither the state nor the edges.
    pub fn is_ignored(&self) -> bool {
        matches!(self, ConnectionOutcome::Ignored(_))
    }
}

/// Outcome of a single dispatched [`EditorEvent`](gridflow_core::event::EditorEvent).
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Placement(PlacementOutcome),
    Connection(ConnectionOutcome),
}

impl EventOutcome {
    /// Returns true if the event left the editor unchanged.
    pub fn is_ignored(&self) -> bool {
        match self {
            EventOutcome::Placement(outcome) => outcome.is_ignored(),
            EventOutcome::Connection(outcome) => outcome.is_ignored(),
        }
    }

    /// Returns the reason the event was ignored, if it was.
    pub fn ignore_reason(&self) -> Option<IgnoreReason> {
        match self {
            EventOutcome::Placement(PlacementOutcome::Ignored(reason))
            | EventOutcome::Connection(ConnectionOutcome::Ignored(reason)) => Some(*reason),
            _ => None,
        }
    }
}

impl From<PlacementOutcome> for EventOutcome {
    fn from(outcome: PlacementOutcome) -> Self {
        EventOutcome::Placement(outcome)
    }
}

impl From<ConnectionOutcome> for EventOutcome {
    fn from(outcome: ConnectionOutcome) -> Self {
        EventOutcome::Connection(outcome)
    }
}

#[cfg(test)]
mod tests {
    use gridflow_core::activity::ActivityKind;

    use super::*;

    #[test]
    fn test_ignore_reason_display() {
        assert_eq!(
            IgnoreReason::OutOfBounds { col: -1, row: 2 }.to_string(),
            "cell (-1, 2) is outside the surface"
        );
        assert_eq!(
            IgnoreReason::UnknownNode(NodeId::new(9)).to_string(),
            "node 9 does not exist"
        );
        assert_eq!(IgnoreReason::NotArmed.to_string(), "no connection is armed");
    }

    #[test]
    fn test_placement_outcome_accessors() {
        let node = Node::new(NodeId::new(2), ActivityKind::Stop, GridCell::new(1, 1));
        let evicted = Node::new(NodeId::new(1), ActivityKind::Start, GridCell::new(1, 1));
        let outcome = PlacementOutcome::Replaced {
            node,
            eviction: Eviction::new(evicted, Vec::new()),
        };

        assert_eq!(outcome.node(), Some(&node));
        assert_eq!(outcome.eviction().map(Eviction::node), Some(&evicted));
        assert!(!outcome.is_ignored());

        let ignored = PlacementOutcome::Ignored(IgnoreReason::UnknownNode(NodeId::new(5)));
        assert_eq!(ignored.node(), None);
        assert_eq!(ignored.eviction(), None);
        assert!(ignored.is_ignored());
    }

    #[test]
    fn test_event_outcome_ignore_reason() {
        let outcome: EventOutcome = ConnectionOutcome::Ignored(IgnoreReason::NotArmed).into();
        assert!(outcome.is_ignored());
        assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::NotArmed));

        let outcome: EventOutcome = ConnectionOutcome::PreviewCleared.into();
        assert!(!outcome.is_ignored());
        assert_eq!(outcome.ignore_reason(), None);
    }
}
