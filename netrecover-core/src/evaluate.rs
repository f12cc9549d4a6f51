//! Edge correctness of a recovered structure against a known network.
//!
//! Both sides are compared as undirected edge sets: orientation and
//! duplicates are ignored, and self-pairs count like any other edge.

use std::collections::HashSet;

use crate::types::{EdgeSet, RecoveredEdge};

/// Overlap between recovered and ground-truth edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeCorrectness {
    matched: usize,
    truth_edges: usize,
    recovered_edges: usize,
}

impl EdgeCorrectness {
    /// Returns the number of distinct ground-truth edges that were recovered.
    #[must_use]
    #[rustfmt::skip]
    pub const fn matched(&self) -> usize { self.matched }

    /// Returns the number of distinct ground-truth edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn truth_edges(&self) -> usize { self.truth_edges }

    /// Returns the number of distinct recovered edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn recovered_edges(&self) -> usize { self.recovered_edges }

    /// Returns `matched / truth_edges`, or `None` when the truth is empty.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "Edge correctness is a fraction of edge counts."
    )]
    pub fn ratio(&self) -> Option<f64> {
        (self.truth_edges > 0).then(|| self.matched as f64 / self.truth_edges as f64)
    }
}

/// Scores `recovered` against the ground-truth edge list.
///
/// # Examples
/// ```
/// use netrecover_core::{EdgeSet, RecoveredEdge, edge_correctness};
///
/// let recovered: EdgeSet = [(0, 2), (1, 0)].into_iter().map(RecoveredEdge::from).collect();
/// let truth = [RecoveredEdge::new(0, 1), RecoveredEdge::new(1, 2)];
/// let score = edge_correctness(&recovered, &truth);
/// assert_eq!(score.matched(), 1);
/// assert_eq!(score.ratio(), Some(0.5));
/// ```
#[must_use]
pub fn edge_correctness(recovered: &EdgeSet, truth: &[RecoveredEdge]) -> EdgeCorrectness {
    let truth: HashSet<(usize, usize)> = truth.iter().map(RecoveredEdge::canonical).collect();
    let recovered: HashSet<(usize, usize)> =
        recovered.iter().map(RecoveredEdge::canonical).collect();
    EdgeCorrectness {
        matched: truth.intersection(&recovered).count(),
        truth_edges: truth.len(),
        recovered_edges: recovered.len(),
    }
}
