//! Property runners for bi-tree recovery.
//!
//! - **Acceptance gate**: under the visited-mark policy every accepted pair
//!   had an unmarked endpoint at that moment and every rejected pair had
//!   none.
//! - **Order**: decisions run through scores in non-increasing order, with
//!   ties in ascending input position.
//! - **Projection**: `recover` equals the accepted subsequence of `trace`.
//! - **Structure**: no multi-vertex cycle under either policy; the
//!   disjoint-set policy spans every component it can reach.
//! - **Determinism**: repeated runs produce identical output.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{BiTreeDecision, BiTreeRecovery, ForestPolicy, RecoveredEdge};

use super::types::BiTreeFixture;

const REPETITIONS: usize = 3;

fn fail_context(fixture: &BiTreeFixture) -> String {
    format!(
        "distribution={:?}, vertices={}, pairs={}",
        fixture.distribution,
        fixture.vertex_count,
        fixture.scores.len()
    )
}

fn trace_for(fixture: &BiTreeFixture, policy: ForestPolicy) -> Result<Vec<BiTreeDecision>, TestCaseError> {
    BiTreeRecovery::new(policy)
        .trace(fixture.vertex_count, &fixture.scores)
        .map_err(|err| TestCaseError::fail(format!("trace failed: {err} ({})", fail_context(fixture))))
}

pub(super) fn run_acceptance_gate_property(fixture: &BiTreeFixture) -> TestCaseResult {
    let trace = trace_for(fixture, ForestPolicy::VisitedMark)?;
    let mut marked = vec![false; fixture.vertex_count];
    for (step, decision) in trace.iter().enumerate() {
        let (source, target) = decision.edge().endpoints();
        let has_unmarked = !marked[source] || !marked[target];
        if decision.is_accepted() != has_unmarked {
            return Err(TestCaseError::fail(format!(
                "step {step}: pair ({source}, {target}) accepted={} but unmarked endpoint={has_unmarked} ({})",
                decision.is_accepted(),
                fail_context(fixture),
            )));
        }
        if has_unmarked {
            marked[source] = true;
            marked[target] = true;
        }
    }
    Ok(())
}

pub(super) fn run_order_property(fixture: &BiTreeFixture) -> TestCaseResult {
    let trace = trace_for(fixture, ForestPolicy::VisitedMark)?;
    if trace.len() != fixture.scores.len() {
        return Err(TestCaseError::fail(format!(
            "trace has {} decisions for {} pairs",
            trace.len(),
            fixture.scores.len()
        )));
    }
    for window in trace.windows(2) {
        let (earlier, later) = (&window[0], &window[1]);
        let ordered = earlier.score() > later.score()
            || (earlier.score() == later.score() && earlier.input_index() < later.input_index());
        if !ordered {
            return Err(TestCaseError::fail(format!(
                "decision for input {} (score {}) precedes input {} (score {}) ({})",
                earlier.input_index(),
                earlier.score(),
                later.input_index(),
                later.score(),
                fail_context(fixture),
            )));
        }
    }
    Ok(())
}

pub(super) fn run_projection_property(fixture: &BiTreeFixture) -> TestCaseResult {
    for policy in [ForestPolicy::VisitedMark, ForestPolicy::DisjointSet] {
        let trace = trace_for(fixture, policy)?;
        let expected: Vec<RecoveredEdge> = trace
            .iter()
            .filter(|decision| decision.is_accepted())
            .map(BiTreeDecision::edge)
            .collect();
        let recovered = BiTreeRecovery::new(policy)
            .recover(fixture.vertex_count, &fixture.scores)
            .map_err(|err| TestCaseError::fail(format!("recover failed: {err}")))?;
        if recovered.edges() != expected.as_slice() {
            return Err(TestCaseError::fail(format!(
                "{policy:?}: recover disagrees with trace ({})",
                fail_context(fixture)
            )));
        }
    }
    Ok(())
}

pub(super) fn run_structure_property(fixture: &BiTreeFixture) -> TestCaseResult {
    for policy in [ForestPolicy::VisitedMark, ForestPolicy::DisjointSet] {
        let trace = trace_for(fixture, policy)?;
        let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
        for decision in trace.iter().filter(|decision| decision.is_accepted()) {
            let (source, target) = decision.edge().endpoints();
            if source == target {
                continue;
            }
            let source_root = find_root(&mut parent, source);
            let target_root = find_root(&mut parent, target);
            if source_root == target_root {
                return Err(TestCaseError::fail(format!(
                    "{policy:?}: pair ({source}, {target}) closes a cycle ({})",
                    fail_context(fixture)
                )));
            }
            parent[target_root] = source_root;
        }
    }

    // Every pair refused by the disjoint-set policy must already be spanned.
    let exact = trace_for(fixture, ForestPolicy::DisjointSet)?;
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    for decision in exact.iter().filter(|decision| decision.is_accepted()) {
        let (source, target) = decision.edge().endpoints();
        let source_root = find_root(&mut parent, source);
        let target_root = find_root(&mut parent, target);
        parent[target_root] = source_root;
    }
    for pair in &fixture.scores {
        if find_root(&mut parent, pair.source()) != find_root(&mut parent, pair.target()) {
            return Err(TestCaseError::fail(format!(
                "DisjointSet: pair ({}, {}) left two components apart ({})",
                pair.source(),
                pair.target(),
                fail_context(fixture)
            )));
        }
    }
    Ok(())
}

pub(super) fn run_determinism_property(fixture: &BiTreeFixture) -> TestCaseResult {
    let recovery = BiTreeRecovery::default();
    let baseline = recovery
        .recover(fixture.vertex_count, &fixture.scores)
        .map_err(|err| TestCaseError::fail(format!("recover failed: {err}")))?;
    for repetition in 0..REPETITIONS {
        let again = recovery
            .recover(fixture.vertex_count, &fixture.scores)
            .map_err(|err| TestCaseError::fail(format!("recover failed: {err}")))?;
        if again != baseline {
            return Err(TestCaseError::fail(format!(
                "repetition {repetition} diverged ({})",
                fail_context(fixture)
            )));
        }
    }
    Ok(())
}

fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
