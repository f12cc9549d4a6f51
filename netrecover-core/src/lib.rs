//! Structure recovery for graphical models over labelled vertices.
//!
//! Two independent heuristics turn externally estimated dependency scores
//! into an edge list:
//!
//! - [`BiTreeRecovery`] grows a forest greedily from pairwise scores
//!   `h_uv`, visiting pairs in descending score order.
//! - [`recover_degree_bound_graph`] picks, for every vertex, the best of
//!   several pre-bounded candidate neighbour sets scored by `h_u,S`.
//!
//! Both entry points are pure: they validate the whole input, then build a
//! fresh [`EdgeSet`]. Equal scores never make the output depend on anything
//! but input order.
//!
//! # Examples
//! ```
//! use netrecover_core::{PairScore, recover_bi_tree};
//!
//! let scores = [
//!     PairScore::new(0, 1, 0.9),
//!     PairScore::new(1, 2, 0.8),
//!     PairScore::new(0, 2, 0.95),
//! ];
//! let edges = recover_bi_tree(3, &scores).expect("indices are in range");
//! let pairs: Vec<_> = edges.iter().map(|edge| edge.endpoints()).collect();
//! assert_eq!(pairs, vec![(0, 2), (0, 1)]);
//! ```

mod bitree;
mod degree_bound;
mod error;
mod evaluate;
mod ordering;
#[cfg(test)]
pub(crate) mod test_utils;
mod types;

pub use crate::{
    bitree::{BiTreeDecision, BiTreeRecovery, DecisionOutcome, ForestPolicy, recover_bi_tree},
    degree_bound::{recover_degree_bound_graph, select_winning_candidates},
    error::{RecoveryError, RecoveryErrorCode, Result},
    evaluate::{EdgeCorrectness, edge_correctness},
    types::{EdgeSet, NeighborSetCandidate, PairScore, RecoveredEdge},
};
