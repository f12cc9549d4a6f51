//! Bidirectional-tree recovery from pairwise scores.
//!
//! Pairs are visited in descending score order (stable on ties) and each
//! one is offered to a [`ForestPolicy`] gate. The default gate keeps one
//! "has an edge" mark per vertex and rejects a pair only when both endpoints
//! are already marked. That check is local. An unmarked endpoint has no
//! edges yet, so an accepted pair never closes a multi-vertex cycle, but a
//! pair joining two already-grown fragments is always refused and the result
//! can stay split where a spanning tree exists. A self-pair on an unmarked
//! vertex is accepted as written. The [`ForestPolicy::DisjointSet`] gate is
//! the opt-in exact alternative and yields a maximum spanning forest.

mod disjoint_set;
mod visited;

use tracing::{debug, instrument};

use crate::{
    error::{RecoveryError, Result},
    ordering::descending_order,
    types::{EdgeSet, PairScore, RecoveredEdge},
};

use self::{disjoint_set::DisjointSet, visited::VisitedMarks};

/// Acceptance rule used while growing the forest.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ForestPolicy {
    /// Accept a pair when at least one endpoint has no edge yet.
    #[default]
    VisitedMark,
    /// Accept a pair when its endpoints lie in different components.
    DisjointSet,
}

/// Whether a pair made it into the edge set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DecisionOutcome {
    /// The pair was appended to the output.
    Accepted,
    /// The pair was skipped.
    Rejected,
}

/// One step of a recovery run, in processing order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiTreeDecision {
    edge: RecoveredEdge,
    score: f64,
    input_index: usize,
    outcome: DecisionOutcome,
}

impl BiTreeDecision {
    /// Returns the pair under consideration, oriented as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> RecoveredEdge { self.edge }

    /// Returns the score the pair was ranked by.
    #[must_use]
    #[rustfmt::skip]
    pub const fn score(&self) -> f64 { self.score }

    /// Returns the pair's position in the caller's input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn input_index(&self) -> usize { self.input_index }

    /// Returns whether the pair was accepted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn outcome(&self) -> DecisionOutcome { self.outcome }

    /// Returns `true` when the pair was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.outcome == DecisionOutcome::Accepted
    }
}

/// Greedy forest growth over scored vertex pairs.
///
/// # Examples
/// ```
/// use netrecover_core::{BiTreeRecovery, ForestPolicy, PairScore};
///
/// let scores = [
///     PairScore::new(0, 1, 0.9),
///     PairScore::new(2, 3, 0.8),
///     PairScore::new(1, 2, 0.7),
///     PairScore::new(0, 3, 0.6),
/// ];
/// let marks = BiTreeRecovery::default()
///     .recover(4, &scores)
///     .expect("valid input");
/// // Both endpoints of (1, 2) are already marked.
/// assert_eq!(marks.len(), 2);
///
/// let exact = BiTreeRecovery::new(ForestPolicy::DisjointSet)
///     .recover(4, &scores)
///     .expect("valid input");
/// assert_eq!(exact.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BiTreeRecovery {
    policy: ForestPolicy,
}

impl BiTreeRecovery {
    /// Creates a recovery run using `policy`.
    #[must_use]
    pub const fn new(policy: ForestPolicy) -> Self {
        Self { policy }
    }

    /// Returns the acceptance rule in use.
    #[must_use]
    #[rustfmt::skip]
    pub const fn policy(&self) -> ForestPolicy { self.policy }

    /// Recovers the accepted edges, in acceptance order.
    ///
    /// # Errors
    ///
    /// Returns [`RecoveryError::VertexOutOfRange`] when a pair references a
    /// vertex `>= vertex_count`, and [`RecoveryError::NonFinitePairScore`]
    /// when a score is NaN or infinite. Nothing is returned in either case.
    #[instrument(
        name = "core.recover_bi_tree",
        err,
        skip(self, scores),
        fields(vertex_count = vertex_count, pairs = scores.len(), policy = ?self.policy),
    )]
    pub fn recover(&self, vertex_count: usize, scores: &[PairScore]) -> Result<EdgeSet> {
        let decisions = self.decide(vertex_count, scores)?;
        let edges: EdgeSet = decisions
            .iter()
            .filter(|decision| decision.is_accepted())
            .map(BiTreeDecision::edge)
            .collect();
        debug!(
            accepted = edges.len(),
            rejected = decisions.len().saturating_sub(edges.len()),
            "bi-tree recovery completed"
        );
        Ok(edges)
    }

    /// Returns every decision taken, accepted or not, in processing order.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Self::recover`].
    #[instrument(
        name = "core.trace_bi_tree",
        err,
        skip(self, scores),
        fields(vertex_count = vertex_count, pairs = scores.len(), policy = ?self.policy),
    )]
    pub fn trace(&self, vertex_count: usize, scores: &[PairScore]) -> Result<Vec<BiTreeDecision>> {
        self.decide(vertex_count, scores)
    }

    fn decide(&self, vertex_count: usize, scores: &[PairScore]) -> Result<Vec<BiTreeDecision>> {
        validate_pairs(vertex_count, scores)?;
        // Gate state covers only the vertices the input touches.
        let touched = touched_vertices(scores);
        match self.policy {
            ForestPolicy::VisitedMark => Ok(run_gate(scores, &mut VisitedMarks::new(touched))),
            ForestPolicy::DisjointSet => Ok(run_gate(scores, &mut DisjointSet::new(touched))),
        }
    }
}

/// Recovers a bidirectional tree with the default visited-mark rule.
///
/// # Errors
///
/// See [`BiTreeRecovery::recover`].
pub fn recover_bi_tree(vertex_count: usize, scores: &[PairScore]) -> Result<EdgeSet> {
    BiTreeRecovery::default().recover(vertex_count, scores)
}

/// Decides whether a pair may join the forest, updating its own state.
trait ForestGate {
    fn admit(&mut self, source: usize, target: usize) -> bool;
}

fn validate_pairs(vertex_count: usize, scores: &[PairScore]) -> Result<()> {
    for pair in scores {
        for vertex in [pair.source(), pair.target()] {
            if vertex >= vertex_count {
                return Err(RecoveryError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        if !pair.score().is_finite() {
            return Err(RecoveryError::NonFinitePairScore {
                first: pair.source(),
                second: pair.target(),
            });
        }
    }
    Ok(())
}

/// Returns one past the largest vertex referenced by an already validated input.
fn touched_vertices(scores: &[PairScore]) -> usize {
    scores
        .iter()
        .map(|pair| pair.source().max(pair.target()).saturating_add(1))
        .max()
        .unwrap_or(0)
}

fn run_gate(scores: &[PairScore], gate: &mut impl ForestGate) -> Vec<BiTreeDecision> {
    descending_order(scores, PairScore::score)
        .into_iter()
        .filter_map(|input_index| {
            let pair = scores.get(input_index)?;
            let outcome = if gate.admit(pair.source(), pair.target()) {
                DecisionOutcome::Accepted
            } else {
                DecisionOutcome::Rejected
            };
            Some(BiTreeDecision {
                edge: RecoveredEdge::new(pair.source(), pair.target()),
                score: pair.score(),
                input_index,
                outcome,
            })
        })
        .collect()
}

#[cfg(test)]
mod property;
