//! Fixture types for bi-tree property tests.

use crate::PairScore;

/// How scores are assigned to generated pairs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, test_strategy::Arbitrary)]
pub(super) enum ScoreDistribution {
    /// Scores drawn from a continuous range; ties are incidental.
    Continuous,
    /// Scores drawn from a pool of one to three values, forcing ties.
    Pooled,
    /// Few pairs relative to the vertex count.
    Sparse,
    /// Every ordered pair in both orientations, including self-pairs.
    Exhaustive,
}

/// Generated input together with the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct BiTreeFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Pair estimates in input order.
    pub scores: Vec<PairScore>,
    /// Distribution used during generation.
    pub distribution: ScoreDistribution,
}
