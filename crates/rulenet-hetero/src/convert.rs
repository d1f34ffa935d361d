//! Tensor-format export → `HeteroGraph`.

use std::collections::BTreeMap;

use ndarray::Array2;

use rulenet_core::HeteroExport;

use crate::error::{HeteroError, Result};
use crate::store::{EdgeStore, HeteroGraph, NodeStore};
use crate::types::EdgeType;

impl HeteroGraph {
    /// Build the container from a parsed export.
    ///
    /// This checks shapes only; call [`HeteroGraph::validate`] to check that
    /// indices refer to existing nodes.
    pub fn from_export(export: &HeteroExport) -> Result<Self> {
        let mut graph = HeteroGraph::default();

        for (node_type, features) in &export.node_features {
            let x = feature_matrix(features, node_type)?;
            let labels = export.node_labels.get(node_type).cloned();
            tracing::debug!(
                node_type = %node_type,
                nodes = x.nrows(),
                features = x.ncols(),
                "Loaded node type"
            );
            graph.nodes.insert(node_type.clone(), NodeStore { x, labels });
        }

        let mut keys: BTreeMap<EdgeType, &String> = BTreeMap::new();
        for (triplet, indices) in &export.edge_indices {
            let edge_type = EdgeType::parse(triplet)?;
            if let Some(first) = keys.insert(edge_type.clone(), triplet) {
                return Err(HeteroError::DuplicateEdgeType {
                    first: first.clone(),
                    second: triplet.clone(),
                });
            }
            let edge_index = index_matrix(indices, triplet)?;
            let num_edges = edge_index.ncols();

            let edge_attr = match export.edge_features.get(triplet) {
                Some(feats) if feats.first().is_some_and(|row| !row.is_empty()) => {
                    let attr = feature_matrix(feats, triplet)?;
                    if attr.nrows() != num_edges {
                        return Err(HeteroError::EdgeFeatureCount {
                            edge_type: triplet.clone(),
                            expected: num_edges,
                            found: attr.nrows(),
                        });
                    }
                    Some(attr)
                }
                _ => None,
            };

            tracing::debug!(edge_type = %edge_type, edges = num_edges, "Loaded edge type");
            graph.edges.insert(
                edge_type,
                EdgeStore {
                    edge_index,
                    edge_attr,
                },
            );
        }

        for triplet in export.edge_features.keys() {
            if !export.edge_indices.contains_key(triplet) {
                tracing::warn!(edge_type = %triplet, "Edge features without edge indices ignored");
            }
        }

        Ok(graph)
    }
}

/// Rows of equal length → `rows × cols` f32 matrix.
fn feature_matrix(rows: &[Vec<f64>], owner: &str) -> Result<Array2<f32>> {
    let cols = rows.first().map_or(0, Vec::len);
    let mut data = Vec::with_capacity(rows.len() * cols);

    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols {
            return Err(HeteroError::RaggedFeatures {
                owner: owner.to_string(),
                row: i,
                expected: cols,
                found: row.len(),
            });
        }
        data.extend(row.iter().map(|&v| v as f32));
    }

    Ok(Array2::from_shape_vec((rows.len(), cols), data)?)
}

/// `[[sources], [targets]]` → `2 × E` matrix. `[]` means no edges.
fn index_matrix(rows: &[Vec<i64>], edge_type: &str) -> Result<Array2<i64>> {
    match rows {
        [] => Ok(Array2::zeros((2, 0))),
        [src, dst] if src.len() == dst.len() => {
            let data: Vec<i64> = src.iter().chain(dst.iter()).copied().collect();
            Ok(Array2::from_shape_vec((2, src.len()), data)?)
        }
        [src, dst] => Err(HeteroError::EdgeIndexShape {
            edge_type: edge_type.to_string(),
            detail: format!("rows of length {} and {}", src.len(), dst.len()),
        }),
        other => Err(HeteroError::EdgeIndexShape {
            edge_type: edge_type.to_string(),
            detail: format!("{} rows", other.len()),
        }),
    }
}
