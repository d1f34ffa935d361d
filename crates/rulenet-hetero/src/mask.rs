//! Feasibility masks over model scores.
//!
//! A mask marks which nodes of one type are allowed by business
//! constraints. Applying it pushes disallowed scores to negative infinity so
//! they can never win an argmax or receive softmax mass.

use ndarray::{Array1, ArrayView1};

use crate::error::{HeteroError, Result};
use crate::store::HeteroGraph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasibilityMask {
    allowed: Vec<bool>,
}

impl FeasibilityMask {
    pub fn new(allowed: Vec<bool>) -> Self {
        Self { allowed }
    }

    pub fn allow_all(len: usize) -> Self {
        Self::new(vec![true; len])
    }

    /// Allow the positions whose label satisfies `predicate`.
    pub fn from_labels<F>(labels: &[String], predicate: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        Self::new(labels.iter().map(|l| predicate(l)).collect())
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn is_allowed(&self, index: usize) -> bool {
        self.allowed.get(index).copied().unwrap_or(false)
    }

    pub fn num_allowed(&self) -> usize {
        self.allowed.iter().filter(|&&a| a).count()
    }

    /// Disallow one position.
    pub fn forbid(&mut self, index: usize) {
        if let Some(slot) = self.allowed.get_mut(index) {
            *slot = false;
        }
    }

    fn check_len(&self, scores: &ArrayView1<'_, f32>) -> Result<()> {
        if scores.len() != self.allowed.len() {
            return Err(HeteroError::MaskLength {
                mask: self.allowed.len(),
                scores: scores.len(),
            });
        }
        Ok(())
    }

    /// Copy of `scores` with disallowed positions set to `-inf`.
    pub fn apply(&self, scores: ArrayView1<'_, f32>) -> Result<Array1<f32>> {
        self.check_len(&scores)?;
        Ok(scores
            .iter()
            .zip(&self.allowed)
            .map(|(&s, &ok)| if ok { s } else { f32::NEG_INFINITY })
            .collect())
    }

    /// Index of the highest allowed score. NaN scores never win; `None` when
    /// nothing is allowed.
    pub fn masked_argmax(&self, scores: ArrayView1<'_, f32>) -> Result<Option<usize>> {
        self.check_len(&scores)?;
        let mut best: Option<(usize, f32)> = None;
        for (i, (&s, &ok)) in scores.iter().zip(&self.allowed).enumerate() {
            if !ok || s.is_nan() {
                continue;
            }
            if best.map_or(true, |(_, b)| s > b) {
                best = Some((i, s));
            }
        }
        Ok(best.map(|(i, _)| i))
    }
}

impl HeteroGraph {
    /// Build a mask over `node_type` from its labels.
    pub fn mask_for<F>(&self, node_type: &str, predicate: F) -> Result<FeasibilityMask>
    where
        F: Fn(&str) -> bool,
    {
        let store = self
            .node(node_type)
            .ok_or_else(|| HeteroError::NodeTypeNotFound(node_type.to_string()))?;
        let labels = store
            .labels
            .as_ref()
            .ok_or_else(|| HeteroError::MissingLabels(node_type.to_string()))?;
        Ok(FeasibilityMask::from_labels(labels, predicate))
    }
}
