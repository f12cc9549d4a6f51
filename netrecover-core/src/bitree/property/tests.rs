//! Proptest runners and seeded rstest cases for bi-tree properties.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::test_utils::suite_proptest_config;

use super::invariants::{
    run_acceptance_gate_property, run_determinism_property, run_order_property,
    run_projection_property, run_structure_property,
};
use super::strategies::{bi_tree_fixture_strategy, generate_fixture};
use super::types::ScoreDistribution;

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn bi_tree_acceptance_gate(fixture in bi_tree_fixture_strategy()) {
        run_acceptance_gate_property(&fixture)?;
    }

    #[test]
    fn bi_tree_decision_order(fixture in bi_tree_fixture_strategy()) {
        run_order_property(&fixture)?;
    }

    #[test]
    fn bi_tree_recover_matches_trace(fixture in bi_tree_fixture_strategy()) {
        run_projection_property(&fixture)?;
    }

    #[test]
    fn bi_tree_structure(fixture in bi_tree_fixture_strategy()) {
        run_structure_property(&fixture)?;
    }

    #[test]
    fn bi_tree_determinism(fixture in bi_tree_fixture_strategy()) {
        run_determinism_property(&fixture)?;
    }
}

#[rstest::rstest]
#[case::continuous_42(ScoreDistribution::Continuous, 42)]
#[case::pooled_42(ScoreDistribution::Pooled, 42)]
#[case::pooled_7777(ScoreDistribution::Pooled, 7777)]
#[case::sparse_999(ScoreDistribution::Sparse, 999)]
#[case::exhaustive_42(ScoreDistribution::Exhaustive, 42)]
fn seeded_fixtures_satisfy_every_property(
    #[case] distribution: ScoreDistribution,
    #[case] seed: u64,
) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(distribution, &mut rng);
    run_acceptance_gate_property(&fixture).expect("acceptance gate must hold");
    run_order_property(&fixture).expect("decision order must hold");
    run_projection_property(&fixture).expect("recover must match trace");
    run_structure_property(&fixture).expect("forest structure must hold");
    run_determinism_property(&fixture).expect("runs must be deterministic");
}
