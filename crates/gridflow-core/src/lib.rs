//! Gridflow Core Types and Definitions
//!
//! This crate provides the foundational value types shared by the Gridflow
//! editing core and its consumers. It includes:
//!
//! - **Identifiers**: Opaque node identities and their allocator ([`identifier`] module)
//! - **Activities**: The closed set of node kinds ([`activity::ActivityKind`])
//! - **Geometry**: Grid cells, pixel points and the mapping between them ([`geometry`] module)
//! - **Diagram**: Placed nodes, directed edges and the connection preview ([`diagram`] module)
//! - **Events**: Decoded input events consumed by the editor ([`event`] module)

pub mod activity;
pub mod diagram;
pub mod event;
pub mod geometry;
pub mod identifier;
