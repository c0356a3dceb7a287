//! Node storage with identity and grid-cell indices.

use std::collections::HashMap;

use indexmap::IndexMap;

use gridflow_core::{diagram::Node, geometry::GridCell, identifier::NodeId};

/// The set of placed nodes.
///
/// Nodes are stored by identity, and a second index maps each occupied
/// [`GridCell`] to the node on it. Both indices are updated incrementally on
/// every mutation, so [`get`](Self::get) and [`find_at`](Self::find_at) are
/// constant-time lookups. At most one node occupies a cell.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: IndexMap<NodeId, Node>,
    cells: HashMap<GridCell, NodeId>,
}

impl NodeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node with the given identity, if it exists.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Checks if a node with the given identity exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the node occupying `cell`, if any.
    pub fn find_at(&self, cell: GridCell) -> Option<&Node> {
        self.cells.get(&cell).and_then(|id| self.nodes.get(id))
    }

    /// Returns an iterator over all nodes. Order is unspecified.
    pub fn all(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns the number of placed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node is placed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts a node, or updates the node with the same identity.
    ///
    /// Updating a node moves it to the new node's cell and frees the cell it
    /// previously occupied.
    ///
    /// # Returns
    /// The previous version of the node, if one existed.
    ///
    /// # Panics
    /// Panics in debug mode if the target cell is held by a different node.
    /// Callers clear the cell first (see [`replace`](Self::replace)).
    pub fn insert(&mut self, node: Node) -> Option<Node> {
        #[cfg(debug_assertions)]
        {
            if let Some(occupant) = self.cells.get(&node.cell()) {
                assert_eq!(
                    *occupant,
                    node.id(),
                    "Inserting node: cell {} is already occupied by node {occupant}",
                    node.cell(),
                );
            }
        }

        let previous = self.nodes.insert(node.id(), node);
        if let Some(vacated) = previous.filter(|previous| previous.cell() != node.cell()) {
            self.cells.remove(&vacated.cell());
        }
        self.cells.insert(node.cell(), node.id());
        previous
    }

    /// Puts `node` on its cell, removing whichever other node occupied it.
    ///
    /// # Returns
    /// The displaced occupant, if the cell was held by a different node.
    pub fn replace(&mut self, node: Node) -> Option<Node> {
        let evicted = match self.cells.get(&node.cell()) {
            Some(&occupant) if occupant != node.id() => self.remove(occupant),
            _ => None,
        };
        self.insert(node);
        evicted
    }

    /// Removes the node with the given identity and frees its cell.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.swap_remove(&id)?;
        if self.cells.get(&node.cell()) == Some(&id) {
            self.cells.remove(&node.cell());
        }
        Some(node)
    }
}
