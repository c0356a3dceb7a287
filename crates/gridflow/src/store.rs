//! Canonical diagram state.
//!
//! The two stores are the only holders of diagram state. They perform exactly
//! the mutation they are asked for and nothing more; policy such as eviction
//! and cascading edge cleanup lives in the controllers.
//!
//! - [`NodeStore`]: placed nodes, indexed both by identity and by grid cell
//! - [`EdgeStore`]: directed edges, keyed by source so that each node has at
//!   most one outgoing edge

mod edges;
mod nodes;

pub use edges::EdgeStore;
pub use nodes::NodeStore;
