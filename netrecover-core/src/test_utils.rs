//! Shared test utilities for `netrecover-core`.

use netrecover_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{NeighborSetCandidate, PairScore};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds pair estimates from `(source, target, score)` tuples.
#[must_use]
pub(crate) fn pairs(raw: &[(usize, usize, f64)]) -> Vec<PairScore> {
    raw.iter()
        .map(|&(source, target, score)| PairScore::new(source, target, score))
        .collect()
}

/// Builds per-vertex candidate lists from `(neighbours, score)` tuples.
#[must_use]
pub(crate) fn candidates(raw: Vec<Vec<(Vec<usize>, f64)>>) -> Vec<Vec<NeighborSetCandidate>> {
    raw.into_iter()
        .map(|list| {
            list.into_iter()
                .map(|(neighbors, score)| NeighborSetCandidate::new(neighbors, score))
                .collect()
        })
        .collect()
}
