//! Click-to-connect workflow.
//!
//! Creating an edge takes two clicks: the user arms a source node through its
//! connection handle, then clicks the target. While armed, the pointer position
//! is tracked as a preview endpoint so the renderer can draw the pending edge.
//!
//! ```text
//!            arm(n) [n exists]
//!   Idle ───────────────────────► Armed(n, None)
//!    ▲                              │  pointer_move(p)  → Armed(n, Some(p))
//!    │                              │  pointer_leave    → Armed(n, None)
//!    │                              │  arm(m) [m exists]→ Armed(m, None)
//!    │    click(n)  : cancel        │
//!    └──────────────────────────────┘
//!         click(t != n) [t exists] : commit edge n → t
//! ```

use log::{debug, trace};

use gridflow_core::{
    diagram::{ConnectionPreview, Edge},
    geometry::Point,
    identifier::NodeId,
};

use crate::{
    outcome::{ConnectionOutcome, IgnoreReason},
    store::{EdgeStore, NodeStore},
};

/// State of the connection workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ConnectionState {
    /// No connection is being created.
    #[default]
    Idle,
    /// A source is chosen and a target click is awaited.
    Armed {
        source: NodeId,
        preview: Option<Point>,
    },
}

/// Drives the two-phase connection workflow.
///
/// Every invalid transition degrades to an ignored outcome; the controller
/// never reports an error.
#[derive(Debug, Clone, Default)]
pub struct ConnectionController {
    state: ConnectionState,
}

impl ConnectionController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current workflow state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Returns the pending connection for the renderer, or `None` when idle.
    pub fn preview(&self) -> Option<ConnectionPreview> {
        match self.state {
            ConnectionState::Idle => None,
            ConnectionState::Armed { source, preview } => {
                Some(ConnectionPreview::new(source, preview))
            }
        }
    }

    /// Arms `node` as the source of a new connection.
    ///
    /// Re-arming while already armed discards the previous source without
    /// creating an edge. Arming a node that does not exist changes nothing.
    pub fn arm_start(&mut self, node: NodeId, nodes: &NodeStore) -> ConnectionOutcome {
        if !nodes.contains(node) {
            debug!(node_id:% = node, reason = "unknown_node"; "Ignoring arm of unknown node");
            return ConnectionOutcome::Ignored(IgnoreReason::UnknownNode(node));
        }

        let discarded = match self.state {
            ConnectionState::Armed { source, .. } => Some(source),
            ConnectionState::Idle => None,
        };
        self.state = ConnectionState::Armed {
            source: node,
            preview: None,
        };
        debug!(source_id:% = node, discarded:? = discarded.map(NodeId::get); "Connection armed");

        ConnectionOutcome::Armed {
            source: node,
            discarded,
        }
    }

    /// Moves the preview endpoint to `point`.
    pub fn pointer_move(&mut self, point: Point) -> ConnectionOutcome {
        match &mut self.state {
            ConnectionState::Armed { preview, .. } => {
                *preview = Some(point);
                trace!(x = point.x(), y = point.y(); "Preview endpoint updated");
                ConnectionOutcome::PreviewUpdated
            }
            ConnectionState::Idle => ConnectionOutcome::Ignored(IgnoreReason::NotArmed),
        }
    }

    /// Clears the preview endpoint when the pointer leaves the surface.
    pub fn pointer_leave(&mut self) -> ConnectionOutcome {
        match &mut self.state {
            ConnectionState::Armed { preview, .. } => {
                *preview = None;
                trace!("Preview endpoint cleared");
                ConnectionOutcome::PreviewCleared
            }
            ConnectionState::Idle => ConnectionOutcome::Ignored(IgnoreReason::NotArmed),
        }
    }

    /// Handles a click on `target`.
    ///
    /// Clicking the armed source cancels. Clicking any other existing node
    /// commits an edge from the source to it, replacing the source's previous
    /// outgoing edge. Both return the controller to idle. A click on a
    /// missing target leaves the connection armed.
    pub fn click_target(
        &mut self,
        target: NodeId,
        nodes: &NodeStore,
        edges: &mut EdgeStore,
    ) -> ConnectionOutcome {
        let ConnectionState::Armed { source, .. } = self.state else {
            debug!(node_id:% = target, reason = "not_armed"; "Ignoring click while idle");
            return ConnectionOutcome::Ignored(IgnoreReason::NotArmed);
        };

        if target == source {
            self.state = ConnectionState::Idle;
            debug!(source_id:% = source; "Connection cancelled");
            return ConnectionOutcome::Cancelled { source };
        }

        if !nodes.contains(source) {
            self.state = ConnectionState::Idle;
            debug!(source_id:% = source, reason = "source_gone"; "Dropping connection from destroyed source");
            return ConnectionOutcome::Ignored(IgnoreReason::SourceGone(source));
        }

        if !nodes.contains(target) {
            debug!(node_id:% = target, reason = "unknown_target"; "Ignoring click on unknown target");
            return ConnectionOutcome::Ignored(IgnoreReason::UnknownTarget(target));
        }

        let replaced = edges.upsert_by_from(source, target);
        self.state = ConnectionState::Idle;
        let edge = Edge::new(source, target);
        debug!(
            from:% = source,
            to:% = target,
            replaced:? = replaced.map(|edge| edge.to().get());
            "Connection committed"
        );

        ConnectionOutcome::Committed { edge, replaced }
    }
}
