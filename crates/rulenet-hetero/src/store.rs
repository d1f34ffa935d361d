//! The heterogeneous graph container.

use std::collections::BTreeMap;

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::types::EdgeType;

/// Per-node-type storage: an `N × F` feature matrix plus optional names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStore {
    pub x: Array2<f32>,
    pub labels: Option<Vec<String>>,
}

/// Per-edge-type storage: a `2 × E` index matrix (row 0 sources, row 1
/// targets) plus an optional `E × D` attribute matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStore {
    pub edge_index: Array2<i64>,
    pub edge_attr: Option<Array2<f32>>,
}

/// A graph with typed node sets and typed edge sets.
///
/// Types are kept in `BTreeMap`s, so iteration order is sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeteroGraph {
    pub nodes: BTreeMap<String, NodeStore>,
    pub edges: BTreeMap<EdgeType, EdgeStore>,
}

impl NodeStore {
    pub fn num_nodes(&self) -> usize {
        self.x.nrows()
    }

    pub fn num_features(&self) -> usize {
        self.x.ncols()
    }
}

impl EdgeStore {
    pub fn num_edges(&self) -> usize {
        self.edge_index.ncols()
    }

    pub fn num_edge_features(&self) -> Option<usize> {
        self.edge_attr.as_ref().map(|a| a.ncols())
    }

    pub fn sources(&self) -> ArrayView1<'_, i64> {
        self.edge_index.row(0)
    }

    pub fn targets(&self) -> ArrayView1<'_, i64> {
        self.edge_index.row(1)
    }
}

impl HeteroGraph {
    pub fn node_types(&self) -> Vec<&str> {
        self.nodes.keys().map(String::as_str).collect()
    }

    pub fn edge_types(&self) -> Vec<&EdgeType> {
        self.edges.keys().collect()
    }

    pub fn node(&self, node_type: &str) -> Option<&NodeStore> {
        self.nodes.get(node_type)
    }

    pub fn edge(&self, edge_type: &EdgeType) -> Option<&EdgeStore> {
        self.edges.get(edge_type)
    }

    /// Total nodes across all types.
    pub fn num_nodes(&self) -> usize {
        self.nodes.values().map(NodeStore::num_nodes).sum()
    }

    /// Total edges across all types.
    pub fn num_edges(&self) -> usize {
        self.edges.values().map(EdgeStore::num_edges).sum()
    }

    /// Node types and edge types, the shape a GNN layer is built from.
    pub fn metadata(&self) -> (Vec<String>, Vec<EdgeType>) {
        (
            self.nodes.keys().cloned().collect(),
            self.edges.keys().cloned().collect(),
        )
    }
}
