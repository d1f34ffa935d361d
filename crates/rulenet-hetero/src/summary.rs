//! Human- and machine-readable graph summary.

use std::fmt;

use serde::Serialize;

use crate::store::HeteroGraph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeTypeSummary {
    pub node_type: String,
    pub num_nodes: usize,
    pub num_features: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeTypeSummary {
    pub src: String,
    pub rel: String,
    pub dst: String,
    pub num_edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_features: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub node_types: Vec<NodeTypeSummary>,
    pub edge_types: Vec<EdgeTypeSummary>,
    pub total_nodes: usize,
    pub total_edges: usize,
}

impl HeteroGraph {
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            node_types: self
                .nodes
                .iter()
                .map(|(ty, store)| NodeTypeSummary {
                    node_type: ty.clone(),
                    num_nodes: store.num_nodes(),
                    num_features: store.num_features(),
                    labels: store.labels.clone(),
                })
                .collect(),
            edge_types: self
                .edges
                .iter()
                .map(|(et, store)| EdgeTypeSummary {
                    src: et.src.clone(),
                    rel: et.rel.clone(),
                    dst: et.dst.clone(),
                    num_edges: store.num_edges(),
                    num_features: store.num_edge_features(),
                })
                .collect(),
            total_nodes: self.num_nodes(),
            total_edges: self.num_edges(),
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "{rule}")?;
        writeln!(f, "Heterogeneous Graph Summary")?;
        writeln!(f, "{rule}")?;

        writeln!(f, "\nNode Types:")?;
        for node in &self.node_types {
            writeln!(
                f,
                "  - {}: {} nodes, {} features",
                node.node_type, node.num_nodes, node.num_features
            )?;
            if let Some(labels) = &node.labels {
                writeln!(f, "    Labels: {}", labels.join(", "))?;
            }
        }

        writeln!(f, "\nEdge Types:")?;
        for edge in &self.edge_types {
            write!(
                f,
                "  - ({}) --[{}]--> ({}): {} edges",
                edge.src, edge.rel, edge.dst, edge.num_edges
            )?;
            if let Some(n) = edge.num_features {
                write!(f, ", {n} features")?;
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "\nTotal: {} nodes, {} edges",
            self.total_nodes, self.total_edges
        )?;
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{EdgeStore, NodeStore};
    use crate::types::EdgeType;
    use ndarray::{array, Array2};

    fn sample() -> HeteroGraph {
        let mut graph = HeteroGraph::default();
        graph.nodes.insert(
            "person".to_string(),
            NodeStore {
                x: Array2::zeros((2, 3)),
                labels: Some(vec!["Ada".to_string(), "Alan".to_string()]),
            },
        );
        graph.nodes.insert(
            "paper".to_string(),
            NodeStore {
                x: Array2::zeros((1, 4)),
                labels: None,
            },
        );
        graph.edges.insert(
            EdgeType::new("person", "authored", "paper"),
            EdgeStore {
                edge_index: array![[0, 1], [0, 0]],
                edge_attr: Some(Array2::zeros((2, 2))),
            },
        );
        graph.edges.insert(
            EdgeType::new("paper", "cites", "paper"),
            EdgeStore {
                edge_index: Array2::zeros((2, 0)),
                edge_attr: None,
            },
        );
        graph
    }

    #[test]
    fn test_summary_counts() {
        let summary = sample().summary();
        assert_eq!(summary.total_nodes, 3);
        assert_eq!(summary.total_edges, 2);
        assert_eq!(summary.node_types[0].node_type, "paper");
        assert_eq!(summary.edge_types[1].num_features, Some(2));
    }

    #[test]
    fn test_summary_display() {
        let text = sample().summary().to_string();
        assert!(text.contains("Heterogeneous Graph Summary"));
        assert!(text.contains("  - person: 2 nodes, 3 features\n    Labels: Ada, Alan"));
        assert!(text.contains("  - paper: 1 nodes, 4 features"));
        assert!(text.contains("  - (person) --[authored]--> (paper): 2 edges, 2 features"));
        assert!(text.contains("  - (paper) --[cites]--> (paper): 0 edges\n"));
    }

    #[test]
    fn test_summary_json_omits_missing_fields() {
        let json = serde_json::to_value(sample().summary()).unwrap();
        assert!(json["node_types"][0].get("labels").is_none());
        assert_eq!(json["node_types"][1]["labels"][1], "Alan");
        assert!(json["edge_types"][0].get("num_features").is_none());
    }
}
