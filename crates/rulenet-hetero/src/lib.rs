//! rulenet-hetero: Typed heterogeneous graph container.
//!
//! Converts the tensor-format export into per-node-type feature matrices and
//! per-edge-type index matrices, validates index bounds, summarizes the
//! result, and persists it as a binary snapshot. A feasibility mask filters
//! model scores over a node type.

pub mod convert;
pub mod error;
pub mod mask;
pub mod persist;
pub mod store;
pub mod summary;
pub mod types;
pub mod validate;

pub use error::HeteroError;
pub use mask::FeasibilityMask;
pub use store::{EdgeStore, HeteroGraph, NodeStore};
pub use summary::GraphSummary;
pub use types::EdgeType;
