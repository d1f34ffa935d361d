//! Structural checks on a built `HeteroGraph`.

use crate::error::{HeteroError, Result};
use crate::store::HeteroGraph;

impl HeteroGraph {
    /// Check that edges reference existing node types and in-range indices,
    /// and that label lists match node counts.
    pub fn validate(&self) -> Result<()> {
        for (node_type, store) in &self.nodes {
            if let Some(labels) = &store.labels {
                if labels.len() != store.num_nodes() {
                    return Err(HeteroError::LabelCount {
                        node_type: node_type.clone(),
                        expected: store.num_nodes(),
                        found: labels.len(),
                    });
                }
            }
        }

        for (edge_type, store) in &self.edges {
            let sides = [
                ("source", &edge_type.src, store.sources()),
                ("target", &edge_type.dst, store.targets()),
            ];

            for (side, node_type, indices) in sides {
                let num_nodes = self
                    .nodes
                    .get(node_type)
                    .map(|n| n.num_nodes())
                    .ok_or_else(|| HeteroError::UnknownNodeType {
                        edge_type: edge_type.to_string(),
                        node_type: node_type.clone(),
                    })?;

                if let Some(&bad) = indices
                    .iter()
                    .find(|&&i| i < 0 || i as usize >= num_nodes)
                {
                    return Err(HeteroError::IndexOutOfBounds {
                        edge_type: edge_type.to_string(),
                        side,
                        index: bad,
                        num_nodes,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{EdgeStore, NodeStore};
    use crate::types::EdgeType;
    use ndarray::{array, Array2};

    fn graph_with_edges(edge_index: Array2<i64>) -> HeteroGraph {
        let mut graph = HeteroGraph::default();
        graph.nodes.insert(
            "person".to_string(),
            NodeStore {
                x: Array2::zeros((3, 2)),
                labels: None,
            },
        );
        graph.nodes.insert(
            "paper".to_string(),
            NodeStore {
                x: Array2::zeros((2, 1)),
                labels: None,
            },
        );
        graph.edges.insert(
            EdgeType::new("person", "authored", "paper"),
            EdgeStore {
                edge_index,
                edge_attr: None,
            },
        );
        graph
    }

    #[test]
    fn test_valid_graph() {
        graph_with_edges(array![[0, 2], [1, 0]]).validate().unwrap();
    }

    #[test]
    fn test_target_out_of_bounds() {
        let err = graph_with_edges(array![[0, 2], [1, 2]])
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            HeteroError::IndexOutOfBounds { side: "target", index: 2, num_nodes: 2, .. }
        ));
    }

    #[test]
    fn test_negative_index() {
        let err = graph_with_edges(array![[-1], [0]]).validate().unwrap_err();
        assert!(matches!(
            err,
            HeteroError::IndexOutOfBounds { side: "source", index: -1, .. }
        ));
    }

    #[test]
    fn test_unknown_node_type() {
        let mut graph = graph_with_edges(array![[0], [0]]);
        graph.nodes.remove("paper");
        assert!(matches!(
            graph.validate().unwrap_err(),
            HeteroError::UnknownNodeType { ref node_type, .. } if node_type == "paper"
        ));
    }

    #[test]
    fn test_label_count_mismatch() {
        let mut graph = graph_with_edges(array![[0], [0]]);
        graph.nodes.get_mut("paper").unwrap().labels = Some(vec!["only one".to_string()]);
        assert!(matches!(
            graph.validate().unwrap_err(),
            HeteroError::LabelCount { expected: 2, found: 1, .. }
        ));
    }
}
