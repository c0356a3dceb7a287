//! Node identity and allocation.
//!
//! This module provides the opaque [`NodeId`] type and the [`NodeIdAllocator`]
//! that hands out fresh identities in strictly increasing order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identity of a placed node.
///
/// Identities are assigned by a [`NodeIdAllocator`] and are never reused
/// within the allocator that produced them. The numeric value is exposed only
/// so that external layers can encode it (for example in a drag payload).
///
/// # Examples
///
/// ```
/// use gridflow_core::identifier::NodeId;
///
/// let id = NodeId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw identity value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identity value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

/// Monotonic source of fresh [`NodeId`]s.
///
/// The first identity handed out is `1`; every later one is strictly greater
/// than all previous ones. Identities are never recycled, even after the node
/// that carried one has been destroyed.
///
/// # Examples
///
/// ```
/// use gridflow_core::identifier::{NodeId, NodeIdAllocator};
///
/// let mut ids = NodeIdAllocator::new();
/// assert_eq!(ids.allocate(), NodeId::new(1));
/// assert_eq!(ids.allocate(), NodeId::new(2));
/// ```
#[derive(Debug, Clone)]
pub struct NodeIdAllocator {
    next: u64,
}

impl NodeIdAllocator {
    /// Creates an allocator whose first identity is `1`.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns a fresh identity and advances the counter.
    pub fn allocate(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

impl Default for NodeIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
