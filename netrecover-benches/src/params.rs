//! Benchmark parameter types.

use std::fmt;

/// Parameters for a bi-tree recovery benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct BiTreeBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of scored pairs per vertex.
    pub pairs_per_vertex: usize,
}

impl fmt::Display for BiTreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.vertex_count, self.pairs_per_vertex)
    }
}

/// Parameters for a degree-bound recovery benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct DegreeBoundBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Candidate neighbour sets proposed per vertex.
    pub candidates_per_vertex: usize,
    /// Largest neighbour set size.
    pub max_degree: usize,
}

impl fmt::Display for DegreeBoundBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},c={},d={}",
            self.vertex_count, self.candidates_per_vertex, self.max_degree
        )
    }
}
