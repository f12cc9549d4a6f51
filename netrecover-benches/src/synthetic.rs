//! Seeded synthetic estimates.
//!
//! Scores are drawn uniformly from `[0, 1)` and quantised to two decimals so
//! that ties occur at realistic rates.

use netrecover_core::{NeighborSetCandidate, PairScore};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::params::{BiTreeBenchParams, DegreeBoundBenchParams};

/// Errors raised while generating synthetic inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// Generation needs at least two vertices to form a pair.
    #[error("at least two vertices are required (got {got})")]
    TooFewVertices {
        /// Requested vertex count.
        got: usize,
    },
}

/// Generates `vertex_count * pairs_per_vertex` pair estimates.
///
/// # Errors
/// Returns [`SyntheticError::TooFewVertices`] when fewer than two vertices
/// are requested.
pub fn pair_scores(params: BiTreeBenchParams, seed: u64) -> Result<Vec<PairScore>, SyntheticError> {
    ensure_vertices(params.vertex_count)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut scores = Vec::with_capacity(params.vertex_count.saturating_mul(params.pairs_per_vertex));
    for source in 0..params.vertex_count {
        for _ in 0..params.pairs_per_vertex {
            let target = other_vertex(&mut rng, source, params.vertex_count);
            scores.push(PairScore::new(source, target, quantised_score(&mut rng)));
        }
    }
    Ok(scores)
}

/// Generates a candidate table with up to `max_degree` members per set.
///
/// # Errors
/// Returns [`SyntheticError::TooFewVertices`] when fewer than two vertices
/// are requested.
pub fn candidate_table(
    params: DegreeBoundBenchParams,
    seed: u64,
) -> Result<Vec<Vec<NeighborSetCandidate>>, SyntheticError> {
    ensure_vertices(params.vertex_count)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let table = (0..params.vertex_count)
        .map(|vertex| {
            (0..params.candidates_per_vertex.max(1))
                .map(|_| {
                    let degree = rng.gen_range(0..=params.max_degree);
                    let neighbors: Vec<usize> = (0..degree)
                        .map(|_| other_vertex(&mut rng, vertex, params.vertex_count))
                        .collect();
                    NeighborSetCandidate::new(neighbors, quantised_score(&mut rng))
                })
                .collect()
        })
        .collect();
    Ok(table)
}

fn ensure_vertices(vertex_count: usize) -> Result<(), SyntheticError> {
    if vertex_count < 2 {
        return Err(SyntheticError::TooFewVertices { got: vertex_count });
    }
    Ok(())
}

fn other_vertex(rng: &mut SmallRng, vertex: usize, vertex_count: usize) -> usize {
    let offset = rng.gen_range(1..vertex_count);
    (vertex + offset) % vertex_count
}

fn quantised_score(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(0_u32..100)) / 100.0
}
