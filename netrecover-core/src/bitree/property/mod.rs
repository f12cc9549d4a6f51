//! Property-based tests for bidirectional-tree recovery.
//!
//! Replays each recorded decision against an independent model of the
//! acceptance gate, checks that ties are resolved by input order, and
//! verifies the forest structure produced by both policies.

mod invariants;
mod strategies;
mod tests;
mod types;
