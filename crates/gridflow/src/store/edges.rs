//! Edge storage keyed by source node.

use indexmap::IndexMap;

use gridflow_core::{diagram::Edge, identifier::NodeId};

/// The set of directed edges.
///
/// Edges are keyed by their source, so each node has at most one outgoing
/// edge by construction. Any number of edges may share a target.
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    outgoing: IndexMap<NodeId, NodeId>,
}

impl EdgeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over all edges. Order is unspecified.
    pub fn all(&self) -> impl Iterator<Item = Edge> {
        self.outgoing.iter().map(|(from, to)| Edge::new(*from, *to))
    }

    /// Returns the outgoing edge of `from`, if it has one.
    pub fn outgoing(&self, from: NodeId) -> Option<Edge> {
        self.outgoing.get(&from).map(|to| Edge::new(from, *to))
    }

    /// Returns an iterator over every edge whose target is `to`.
    pub fn incoming(&self, to: NodeId) -> impl Iterator<Item = Edge> {
        self.all().filter(move |edge| edge.to() == to)
    }

    /// Returns the number of edges.
    pub fn len(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns true if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    /// Sets the outgoing edge of `from` to point at `to`.
    ///
    /// # Returns
    /// The edge previously leaving `from`, if there was one.
    pub fn upsert_by_from(&mut self, from: NodeId, to: NodeId) -> Option<Edge> {
        self.outgoing
            .insert(from, to)
            .map(|previous| Edge::new(from, previous))
    }

    /// Removes every edge that starts or ends at `id`.
    ///
    /// # Returns
    /// The removed edges.
    pub fn remove_incident_to(&mut self, id: NodeId) -> Vec<Edge> {
        let mut removed = Vec::new();
        self.outgoing.retain(|from, to| {
            let edge = Edge::new(*from, *to);
            if edge.is_incident_to(id) {
                removed.push(edge);
                false
            } else {
                true
            }
        });
        removed
    }
}
