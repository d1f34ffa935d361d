//! Error types for the rulenet-hetero crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeteroError {
    #[error("Invalid edge type {0:?}: expected \"src_type,rel_type,dst_type\"")]
    InvalidEdgeType(String),

    #[error("Ragged features for {owner}: row {row} has {found} values, expected {expected}")]
    RaggedFeatures {
        owner: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Edge types {first:?} and {second:?} name the same triplet")]
    DuplicateEdgeType { first: String, second: String },

    #[error("Edge index for {edge_type} must have 2 rows of equal length, got {detail}")]
    EdgeIndexShape { edge_type: String, detail: String },

    #[error("Edge features for {edge_type} have {found} rows but there are {expected} edges")]
    EdgeFeatureCount {
        edge_type: String,
        expected: usize,
        found: usize,
    },

    #[error("Edge type {edge_type} references unknown node type {node_type:?}")]
    UnknownNodeType {
        edge_type: String,
        node_type: String,
    },

    #[error("Edge type {edge_type}: {side} index {index} out of range for {num_nodes} nodes")]
    IndexOutOfBounds {
        edge_type: String,
        side: &'static str,
        index: i64,
        num_nodes: usize,
    },

    #[error("Node type {node_type:?} has {found} labels for {expected} nodes")]
    LabelCount {
        node_type: String,
        expected: usize,
        found: usize,
    },

    #[error("Node type {0:?} has no labels")]
    MissingLabels(String),

    #[error("Node type {0:?} not found")]
    NodeTypeNotFound(String),

    #[error("Mask covers {mask} positions but there are {scores} scores")]
    MaskLength { mask: usize, scores: usize },

    #[error("Unsupported snapshot version {0}")]
    SnapshotVersion(u32),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("Export error: {0}")]
    Export(#[from] rulenet_core::RuleNetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HeteroError>;
