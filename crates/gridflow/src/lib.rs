//! Gridflow - an editing core for grid-based activity diagrams.
//!
//! The diagram is a directed graph of typed activity nodes laid out on a
//! uniform grid. This crate owns the diagram state and the two interaction
//! protocols that change it: grid-constrained placement with collision
//! eviction, and two-phase click-to-connect with a live preview. Rendering and
//! raw input transport are left to the embedding application, which feeds
//! decoded events in and reads nodes, edges and the preview back out.

pub mod config;
pub mod connection;
pub mod outcome;
pub mod placement;
pub mod store;

mod error;

pub use gridflow_core::{activity, diagram, event, geometry, identifier};

pub use error::GridflowError;

use log::{debug, info, trace};
use serde::Serialize;

use gridflow_core::{
    activity::ActivityKind,
    diagram::{ConnectionPreview, Edge, Node},
    event::{EditorEvent, PlacementRequest},
    geometry::{GridCell, Point},
    identifier::NodeId,
};

use config::EditorConfig;
use connection::ConnectionController;
use outcome::{ConnectionOutcome, EventOutcome, IgnoreReason, PlacementOutcome};
use placement::PlacementController;
use store::{EdgeStore, NodeStore};

/// A single editing session.
///
/// The session owns the node and edge stores, both controllers and the
/// surface configuration. Events are applied one at a time in call order, and
/// every handler completes all of its mutations before returning, so readers
/// never observe a half-applied change such as an eviction that left a
/// dangling edge behind.
///
/// # Examples
///
/// ```
/// use gridflow::{EditorSession, activity::ActivityKind, identifier::NodeId};
///
/// let mut session = EditorSession::default();
/// session.on_palette_drop(ActivityKind::Start, 0, 0);
/// session.on_palette_drop(ActivityKind::Stop, 1, 0);
///
/// session.on_arm_connection(NodeId::new(1));
/// session.on_node_clicked(NodeId::new(2));
///
/// assert_eq!(session.list_nodes().count(), 2);
/// assert_eq!(session.list_edges().count(), 1);
/// assert!(session.current_connection_preview().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    nodes: NodeStore,
    edges: EdgeStore,
    placement: PlacementController,
    connection: ConnectionController,
}

impl EditorSession {
    /// Creates an empty session for the given configuration.
    pub fn new(config: EditorConfig) -> Self {
        info!(
            cell_size = config.surface().cell_size();
            "Creating editor session"
        );
        let placement = PlacementController::new(config.surface().bounds());
        Self {
            config,
            nodes: NodeStore::new(),
            edges: EdgeStore::new(),
            placement,
            connection: ConnectionController::new(),
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Applies a placement request directly.
    pub fn place_or_move(&mut self, request: PlacementRequest) -> PlacementOutcome {
        self.placement
            .place_or_move(request, &mut self.nodes, &mut self.edges)
    }

    /// A palette entry of `kind` was dropped on cell `(col, row)`.
    pub fn on_palette_drop(&mut self, kind: ActivityKind, col: i64, row: i64) -> PlacementOutcome {
        self.place_or_move(PlacementRequest::FromPalette { kind, col, row })
    }

    /// Canvas node `node` was dropped on cell `(col, row)`.
    pub fn on_canvas_node_drop(&mut self, node: NodeId, col: i64, row: i64) -> PlacementOutcome {
        self.place_or_move(PlacementRequest::FromCanvas { node, col, row })
    }

    /// A palette entry was dropped at pixel position `point`.
    ///
    /// The position is mapped to a cell with the configured cell size.
    pub fn on_palette_drop_at_point(&mut self, kind: ActivityKind, point: Point) -> PlacementOutcome {
        match self.cell_at(point) {
            Some(cell) => self.on_palette_drop(kind, cell.col().into(), cell.row().into()),
            None => Self::unmappable(point),
        }
    }

    /// Canvas node `node` was dropped at pixel position `point`.
    pub fn on_canvas_node_drop_at_point(&mut self, node: NodeId, point: Point) -> PlacementOutcome {
        match self.cell_at(point) {
            Some(cell) => self.on_canvas_node_drop(node, cell.col().into(), cell.row().into()),
            None => Self::unmappable(point),
        }
    }

    /// The connection handle of `node` was activated.
    pub fn on_arm_connection(&mut self, node: NodeId) -> ConnectionOutcome {
        self.connection.arm_start(node, &self.nodes)
    }

    /// The pointer moved to `point` over the surface.
    pub fn on_pointer_move_over_surface(&mut self, point: Point) -> ConnectionOutcome {
        self.connection.pointer_move(point)
    }

    /// The pointer left the surface.
    pub fn on_pointer_leave_surface(&mut self) -> ConnectionOutcome {
        self.connection.pointer_leave()
    }

    /// Node `node` was clicked.
    pub fn on_node_clicked(&mut self, node: NodeId) -> ConnectionOutcome {
        self.connection
            .click_target(node, &self.nodes, &mut self.edges)
    }

    /// Applies a single decoded event.
    pub fn dispatch(&mut self, event: EditorEvent) -> EventOutcome {
        trace!(event:? = event; "Dispatching event");
        match event {
            EditorEvent::PaletteDrop { kind, col, row } => {
                self.on_palette_drop(kind, col, row).into()
            }
            EditorEvent::CanvasNodeDrop { node, col, row } => {
                self.on_canvas_node_drop(node, col, row).into()
            }
            EditorEvent::ArmConnection { node } => self.on_arm_connection(node).into(),
            EditorEvent::PointerMove(point) => self.on_pointer_move_over_surface(point).into(),
            EditorEvent::PointerLeave => self.on_pointer_leave_surface().into(),
            EditorEvent::NodeClicked { node } => self.on_node_clicked(node).into(),
        }
    }

    /// Returns an iterator over all placed nodes. Order is unspecified.
    pub fn list_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.all()
    }

    /// Returns an iterator over all edges. Order is unspecified.
    pub fn list_edges(&self) -> impl Iterator<Item = Edge> {
        self.edges.all()
    }

    /// Returns the pending connection, or `None` if no connection is armed.
    pub fn current_connection_preview(&self) -> Option<ConnectionPreview> {
        self.connection.preview()
    }

    /// Returns the node with the given identity, if it exists.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns the node occupying `cell`, if any.
    pub fn node_at(&self, cell: GridCell) -> Option<&Node> {
        self.nodes.find_at(cell)
    }

    /// Returns a deterministic, serializable copy of the diagram state.
    ///
    /// Nodes are sorted by identity and edges by source.
    pub fn snapshot(&self) -> DiagramSnapshot {
        let mut nodes: Vec<Node> = self.nodes.all().copied().collect();
        nodes.sort_by_key(Node::id);
        let mut edges: Vec<Edge> = self.edges.all().collect();
        edges.sort_by_key(|edge| edge.from());

        debug!(nodes = nodes.len(), edges = edges.len(); "Snapshot taken");
        DiagramSnapshot {
            nodes,
            edges,
            preview: self.connection.preview(),
        }
    }

    fn cell_at(&self, point: Point) -> Option<GridCell> {
        GridCell::from_point(point, self.config.surface().cell_size())
    }

    fn unmappable(point: Point) -> PlacementOutcome {
        debug!(x = point.x(), y = point.y(), reason = "unmappable"; "Ignoring drop at unmappable position");
        PlacementOutcome::Ignored(IgnoreReason::Unmappable)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

/// A point-in-time copy of the diagram, for output and inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramSnapshot {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<ConnectionPreview>,
}

impl DiagramSnapshot {
    /// Returns the nodes, sorted by identity.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the edges, sorted by source.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the pending connection, if one was armed.
    pub fn preview(&self) -> Option<ConnectionPreview> {
        self.preview
    }
}
