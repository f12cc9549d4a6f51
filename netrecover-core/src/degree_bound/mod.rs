//! Degree-bounded graph recovery from scored candidate neighbour sets.
//!
//! For every vertex `u` the caller proposes several neighbour sets `S`, each
//! already within whatever degree cap applies, scored by `h_u,S`. Recovery
//! picks the highest-scoring set per vertex (the first one on ties) and
//! emits `(u, v)` for each member `v`. Enforcing the cap is left to whoever
//! builds the candidates.

use tracing::{debug, instrument};

use crate::{
    error::{RecoveryError, Result},
    ordering::first_max_index,
    types::{EdgeSet, NeighborSetCandidate, RecoveredEdge},
};

/// Returns, per vertex, the index of its winning candidate.
///
/// The vertex count is `candidates.len()`; neighbour indices must lie in
/// `[0, candidates.len())`.
///
/// # Errors
///
/// Returns [`RecoveryError::EmptyCandidateList`] for a vertex without
/// candidates, [`RecoveryError::VertexOutOfRange`] for a neighbour outside
/// the graph, and [`RecoveryError::NonFiniteCandidateScore`] for a NaN or
/// infinite score.
///
/// # Examples
/// ```
/// use netrecover_core::{NeighborSetCandidate, select_winning_candidates};
///
/// let candidates = vec![
///     vec![
///         NeighborSetCandidate::new(vec![1, 2], 0.7),
///         NeighborSetCandidate::new(vec![3], 0.9),
///     ],
///     vec![NeighborSetCandidate::new(vec![], 0.1)],
///     vec![NeighborSetCandidate::new(vec![0], 0.4)],
///     vec![NeighborSetCandidate::new(vec![0], 0.4)],
/// ];
/// let winners = select_winning_candidates(&candidates).expect("valid input");
/// assert_eq!(winners, vec![1, 0, 0, 0]);
/// ```
pub fn select_winning_candidates(candidates: &[Vec<NeighborSetCandidate>]) -> Result<Vec<usize>> {
    validate_candidates(candidates)?;
    candidates
        .iter()
        .enumerate()
        .map(|(vertex, list)| {
            first_max_index(list, NeighborSetCandidate::score)
                .ok_or(RecoveryError::EmptyCandidateList { vertex })
        })
        .collect()
}

/// Recovers a degree-bounded graph, one group of edges per vertex.
///
/// Edges are grouped by vertex in index order; within a group they follow
/// the member order of the winning set.
///
/// # Errors
///
/// Fails under the same conditions as [`select_winning_candidates`]; no
/// edges are returned in that case.
///
/// # Examples
/// ```
/// use netrecover_core::{NeighborSetCandidate, recover_degree_bound_graph};
///
/// let candidates = vec![vec![
///     NeighborSetCandidate::new(vec![0], 0.2),
///     NeighborSetCandidate::new(vec![], 0.6),
/// ]];
/// let edges = recover_degree_bound_graph(&candidates).expect("valid input");
/// assert!(edges.is_empty());
/// ```
#[instrument(
    name = "core.recover_degree_bound",
    err,
    skip(candidates),
    fields(
        vertex_count = candidates.len(),
        candidates = candidates.iter().map(Vec::len).sum::<usize>(),
    ),
)]
pub fn recover_degree_bound_graph(candidates: &[Vec<NeighborSetCandidate>]) -> Result<EdgeSet> {
    let winners = select_winning_candidates(candidates)?;
    let selected: Vec<&NeighborSetCandidate> = candidates
        .iter()
        .zip(&winners)
        .filter_map(|(list, &winner)| list.get(winner))
        .collect();

    let capacity = selected
        .iter()
        .map(|candidate| candidate.neighbors().len())
        .sum();
    let mut edges = EdgeSet::with_capacity(capacity);
    for (vertex, candidate) in selected.into_iter().enumerate() {
        for &neighbor in candidate.neighbors() {
            edges.push(RecoveredEdge::new(vertex, neighbor));
        }
    }

    debug!(edges = edges.len(), "degree-bound recovery completed");
    Ok(edges)
}

fn validate_candidates(candidates: &[Vec<NeighborSetCandidate>]) -> Result<()> {
    let vertex_count = candidates.len();
    for (vertex, list) in candidates.iter().enumerate() {
        if list.is_empty() {
            return Err(RecoveryError::EmptyCandidateList { vertex });
        }
        for (position, candidate) in list.iter().enumerate() {
            if !candidate.score().is_finite() {
                return Err(RecoveryError::NonFiniteCandidateScore {
                    vertex,
                    candidate: position,
                });
            }
            if let Some(&neighbor) = candidate
                .neighbors()
                .iter()
                .find(|&&neighbor| neighbor >= vertex_count)
            {
                return Err(RecoveryError::VertexOutOfRange {
                    vertex: neighbor,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}
