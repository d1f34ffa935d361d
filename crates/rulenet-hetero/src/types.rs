//! Edge type triplets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HeteroError, Result};

/// `(source node type, relation, destination node type)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeType {
    pub src: String,
    pub rel: String,
    pub dst: String,
}

impl EdgeType {
    pub fn new(src: impl Into<String>, rel: impl Into<String>, dst: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            rel: rel.into(),
            dst: dst.into(),
        }
    }

    /// Parse the export's `"src,rel,dst"` key.
    pub fn parse(triplet: &str) -> Result<Self> {
        let parts: Vec<&str> = triplet.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [src, rel, dst] if !src.is_empty() && !rel.is_empty() && !dst.is_empty() => {
                Ok(Self::new(*src, *rel, *dst))
            }
            _ => Err(HeteroError::InvalidEdgeType(triplet.to_string())),
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.src, self.rel, self.dst)
    }
}
