//! Grid-constrained node placement.
//!
//! The [`PlacementController`] turns decoded drop requests into store
//! mutations. A drop onto an occupied cell evicts the occupant together with
//! every edge that touches it; eviction is one level deep and never cascades
//! further.

use log::debug;

use gridflow_core::{
    activity::ActivityKind,
    diagram::Node,
    event::PlacementRequest,
    geometry::{GridCell, SurfaceBounds},
    identifier::{NodeId, NodeIdAllocator},
};

use crate::{
    outcome::{Eviction, IgnoreReason, PlacementOutcome},
    store::{EdgeStore, NodeStore},
};

/// Resolves placement and move requests against the node and edge stores.
///
/// The controller owns the identity allocator, so identities are assigned
/// only to nodes that are actually placed.
#[derive(Debug, Clone)]
pub struct PlacementController {
    bounds: SurfaceBounds,
    ids: NodeIdAllocator,
}

impl PlacementController {
    /// Creates a controller for a surface with the given bounds.
    pub fn new(bounds: SurfaceBounds) -> Self {
        Self {
            bounds,
            ids: NodeIdAllocator::new(),
        }
    }

    /// Applies a placement request.
    ///
    /// All store mutations for the request happen before this returns. Out
    /// of range targets and unknown nodes leave both stores untouched.
    pub fn place_or_move(
        &mut self,
        request: PlacementRequest,
        nodes: &mut NodeStore,
        edges: &mut EdgeStore,
    ) -> PlacementOutcome {
        let (col, row) = request.target();
        let Some(target) = self.resolve_target(col, row) else {
            debug!(col, row, reason = "out_of_bounds"; "Ignoring drop outside the surface");
            return PlacementOutcome::Ignored(IgnoreReason::OutOfBounds { col, row });
        };

        match request {
            PlacementRequest::FromPalette { kind, .. } => {
                self.place_new(kind, target, nodes, edges)
            }
            PlacementRequest::FromCanvas { node, .. } => {
                Self::move_existing(node, target, nodes, edges)
            }
        }
    }

    fn resolve_target(&self, col: i64, row: i64) -> Option<GridCell> {
        GridCell::from_signed(col, row).filter(|cell| self.bounds.contains(*cell))
    }

    fn place_new(
        &mut self,
        kind: ActivityKind,
        target: GridCell,
        nodes: &mut NodeStore,
        edges: &mut EdgeStore,
    ) -> PlacementOutcome {
        let occupant = nodes.find_at(target).map(Node::id);
        let node = Node::new(self.ids.allocate(), kind, target);

        let Some(occupant) = occupant else {
            nodes.insert(node);
            debug!(node_id:% = node.id(), kind:% = kind, cell:% = target; "Node created");
            return PlacementOutcome::Created { node };
        };

        let removed_edges = edges.remove_incident_to(occupant);
        let evicted = nodes.replace(node);
        let eviction = evicted.map(|evicted| Eviction::new(evicted, removed_edges));
        debug!(
            node_id:% = node.id(),
            kind:% = kind,
            cell:% = target,
            evicted_id:% = occupant;
            "Node created over occupied cell"
        );

        match eviction {
            Some(eviction) => PlacementOutcome::Replaced { node, eviction },
            None => PlacementOutcome::Created { node },
        }
    }

    fn move_existing(
        id: NodeId,
        target: GridCell,
        nodes: &mut NodeStore,
        edges: &mut EdgeStore,
    ) -> PlacementOutcome {
        let Some(moving) = nodes.get(id).copied() else {
            debug!(node_id:% = id, reason = "unknown_node"; "Ignoring drop of unknown node");
            return PlacementOutcome::Ignored(IgnoreReason::UnknownNode(id));
        };

        let eviction = match nodes.find_at(target).map(Node::id) {
            Some(occupant) if occupant != id => {
                let evicted = nodes.remove(occupant);
                let removed_edges = edges.remove_incident_to(occupant);
                debug!(
                    evicted_id:% = occupant,
                    removed_edges = removed_edges.len();
                    "Evicting node"
                );
                evicted.map(|evicted| Eviction::new(evicted, removed_edges))
            }
            _ => None,
        };

        let node = moving.with_cell(target);
        nodes.insert(node);
        debug!(node_id:% = id, from:% = moving.cell(), to:% = target; "Node moved");

        PlacementOutcome::Moved {
            node,
            from: moving.cell(),
            eviction,
        }
    }
}

impl Default for PlacementController {
    fn default() -> Self {
        Self::new(SurfaceBounds::unbounded())
    }
}

#[cfg(test)]
mod tests {
    use gridflow_core::diagram::Edge;

    use super::*;

    struct Fixture {
        controller: PlacementController,
        nodes: NodeStore,
        edges: EdgeStore,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_bounds(SurfaceBounds::unbounded())
        }

        fn with_bounds(bounds: SurfaceBounds) -> Self {
            Self {
                controller: PlacementController::new(bounds),
                nodes: NodeStore::new(),
                edges: EdgeStore::new(),
            }
        }

        fn palette(&mut self, kind: ActivityKind, col: i64, row: i64) -> PlacementOutcome {
            self.controller.place_or_move(
                PlacementRequest::FromPalette { kind, col, row },
                &mut self.nodes,
                &mut self.edges,
            )
        }

        fn canvas(&mut self, node: u64, col: i64, row: i64) -> PlacementOutcome {
            self.controller.place_or_move(
                PlacementRequest::FromCanvas {
                    node: NodeId::new(node),
                    col,
                    row,
                },
                &mut self.nodes,
                &mut self.edges,
            )
        }
    }

    fn id(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn test_palette_drop_on_free_cell_creates_node() {
        let mut fx = Fixture::new();

        let outcome = fx.palette(ActivityKind::Start, 1, 1);

        let expected = Node::new(id(1), ActivityKind::Start, GridCell::new(1, 1));
        assert_eq!(outcome, PlacementOutcome::Created { node: expected });
        assert_eq!(fx.nodes.get(id(1)), Some(&expected));
    }

    #[test]
    fn test_palette_drop_assigns_increasing_ids() {
        let mut fx = Fixture::new();

        fx.palette(ActivityKind::Start, 0, 0);
        fx.palette(ActivityKind::Action, 1, 0);
        let outcome = fx.palette(ActivityKind::Stop, 2, 0);

        assert_eq!(outcome.node().map(Node::id), Some(id(3)));
    }

    #[test]
    fn test_palette_drop_on_occupied_cell_evicts_occupant() {
        let mut fx = Fixture::new();
        fx.palette(ActivityKind::Start, 1, 1);

        let outcome = fx.palette(ActivityKind::Stop, 1, 1);

        let PlacementOutcome::Replaced { node, eviction } = outcome else {
            panic!("expected replacement, got {outcome:?}");
        };
        assert_eq!(node, Node::new(id(2), ActivityKind::Stop, GridCell::new(1, 1)));
        assert_eq!(eviction.node().id(), id(1));
        assert!(eviction.edges().is_empty());
        assert_eq!(fx.nodes.len(), 1);
        assert!(!fx.nodes.contains(id(1)));
    }

    #[test]
    fn test_palette_eviction_removes_only_incident_edges() {
        let mut fx = Fixture::new();
        fx.palette(ActivityKind::Start, 0, 0); // 1
        fx.palette(ActivityKind::Action, 1, 0); // 2
        fx.palette(ActivityKind::Action, 2, 0); // 3
        fx.palette(ActivityKind::Stop, 3, 0); // 4
        fx.edges.upsert_by_from(id(1), id(2));
        fx.edges.upsert_by_from(id(2), id(3));
        fx.edges.upsert_by_from(id(3), id(4));

        let outcome = fx.palette(ActivityKind::Decision, 1, 0);

        let eviction = outcome.eviction().expect("occupant should be evicted");
        assert_eq!(eviction.node().id(), id(2));
        assert_eq!(eviction.edges().len(), 2);
        assert!(eviction.edges().contains(&Edge::new(id(1), id(2))));
        assert!(eviction.edges().contains(&Edge::new(id(2), id(3))));
        let remaining: Vec<Edge> = fx.edges.all().collect();
        assert_eq!(remaining, vec![Edge::new(id(3), id(4))]);
    }

    #[test]
    fn test_negative_target_is_ignored() {
        let mut fx = Fixture::new();

        let outcome = fx.palette(ActivityKind::Start, -1, 0);

        assert_eq!(
            outcome,
            PlacementOutcome::Ignored(IgnoreReason::OutOfBounds { col: -1, row: 0 })
        );
        assert!(fx.nodes.is_empty());
    }

    #[test]
    fn test_ignored_drop_does_not_consume_an_id() {
        let mut fx = Fixture::new();

        fx.palette(ActivityKind::Start, 0, -3);
        let outcome = fx.palette(ActivityKind::Start, 0, 0);

        assert_eq!(outcome.node().map(Node::id), Some(id(1)));
    }

    #[test]
    fn test_target_beyond_bounds_is_ignored() {
        let mut fx = Fixture::with_bounds(SurfaceBounds::new(Some(4), Some(4)));
        fx.palette(ActivityKind::Start, 3, 3);

        assert!(fx.palette(ActivityKind::Stop, 4, 0).is_ignored());
        assert!(fx.canvas(1, 0, 4).is_ignored());
        assert_eq!(fx.nodes.get(id(1)).map(Node::cell), Some(GridCell::new(3, 3)));
    }

    #[test]
    fn test_canvas_drop_moves_node_to_free_cell() {
        let mut fx = Fixture::new();
        fx.palette(ActivityKind::Recv, 0, 0);

        let outcome = fx.canvas(1, 4, 2);

        let moved = Node::new(id(1), ActivityKind::Recv, GridCell::new(4, 2));
        assert_eq!(
            outcome,
            PlacementOutcome::Moved {
                node: moved,
                from: GridCell::new(0, 0),
                eviction: None,
            }
        );
        assert_eq!(fx.nodes.find_at(GridCell::new(0, 0)), None);
        assert_eq!(fx.nodes.find_at(GridCell::new(4, 2)), Some(&moved));
    }

    #[test]
    fn test_canvas_drop_keeps_edges_of_moved_node() {
        let mut fx = Fixture::new();
        fx.palette(ActivityKind::Start, 0, 0);
        fx.palette(ActivityKind::Stop, 1, 0);
        fx.edges.upsert_by_from(id(1), id(2));

        fx.canvas(1, 5, 5);

        assert_eq!(fx.edges.outgoing(id(1)), Some(Edge::new(id(1), id(2))));
    }

    #[test]
    fn test_canvas_drop_onto_occupied_cell_evicts_occupant() {
        let mut fx = Fixture::new();
        fx.palette(ActivityKind::Stop, 1, 1); // 1
        fx.palette(ActivityKind::Recv, 3, 1); // 2
        fx.palette(ActivityKind::Send, 5, 1); // 3
        fx.edges.upsert_by_from(id(1), id(2));
        fx.edges.upsert_by_from(id(3), id(1));

        let outcome = fx.canvas(2, 1, 1);

        let eviction = outcome.eviction().expect("occupant should be evicted");
        assert_eq!(eviction.node().id(), id(1));
        assert_eq!(eviction.edges().len(), 2);
        assert!(fx.edges.is_empty());
        assert_eq!(fx.nodes.len(), 2);
        assert_eq!(fx.nodes.find_at(GridCell::new(1, 1)).map(Node::id), Some(id(2)));
        assert_eq!(fx.nodes.find_at(GridCell::new(3, 1)), None);
    }

    #[test]
    fn test_canvas_drop_on_own_cell_is_idempotent() {
        let mut fx = Fixture::new();
        fx.palette(ActivityKind::Start, 2, 2);
        fx.palette(ActivityKind::Stop, 3, 2);
        fx.edges.upsert_by_from(id(1), id(2));
        let before: Vec<Node> = fx.nodes.all().copied().collect();

        let outcome = fx.canvas(1, 2, 2);

        assert!(outcome.eviction().is_none());
        let after: Vec<Node> = fx.nodes.all().copied().collect();
        assert_eq!(before, after);
        assert_eq!(fx.edges.len(), 1);
    }

    #[test]
    fn test_canvas_drop_of_unknown_node_is_ignored() {
        let mut fx = Fixture::new();
        fx.palette(ActivityKind::Start, 0, 0);

        let outcome = fx.canvas(42, 0, 0);

        assert_eq!(
            outcome,
            PlacementOutcome::Ignored(IgnoreReason::UnknownNode(id(42)))
        );
        assert_eq!(fx.nodes.find_at(GridCell::new(0, 0)).map(Node::id), Some(id(1)));
    }
}
