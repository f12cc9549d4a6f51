//! Fixture generators for bi-tree property tests.
//!
//! Each generator draws from a seeded [`SmallRng`] so a failing seed
//! reproduces exactly.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PairScore;

use super::types::{BiTreeFixture, ScoreDistribution};

const MAX_VERTICES: usize = 48;
const EXHAUSTIVE_MAX_VERTICES: usize = 12;

pub(super) fn bi_tree_fixture_strategy() -> impl Strategy<Value = BiTreeFixture> {
    (any::<ScoreDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

pub(super) fn generate_fixture(
    distribution: ScoreDistribution,
    rng: &mut SmallRng,
) -> BiTreeFixture {
    let (vertex_count, scores) = match distribution {
        ScoreDistribution::Continuous => {
            let vertex_count = rng.gen_range(1..=MAX_VERTICES);
            let pair_count = rng.gen_range(0..=vertex_count.saturating_mul(3));
            let scores = random_pairs(rng, vertex_count, pair_count, |r| r.gen_range(-1.0..1.0));
            (vertex_count, scores)
        }
        ScoreDistribution::Pooled => {
            let vertex_count = rng.gen_range(1..=MAX_VERTICES);
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<f64> = (0..pool_size)
                .map(|_| f64::from(rng.gen_range(0_u8..=4)))
                .collect();
            let pair_count = rng.gen_range(0..=vertex_count.saturating_mul(3));
            let scores = random_pairs(rng, vertex_count, pair_count, |r| {
                pool[r.gen_range(0..pool.len())]
            });
            (vertex_count, scores)
        }
        ScoreDistribution::Sparse => {
            let vertex_count = rng.gen_range(0..=MAX_VERTICES);
            let pair_count = rng.gen_range(0..=vertex_count / 2);
            let scores = random_pairs(rng, vertex_count, pair_count, |r| r.gen_range(0.0..10.0));
            (vertex_count, scores)
        }
        ScoreDistribution::Exhaustive => {
            let vertex_count = rng.gen_range(1..=EXHAUSTIVE_MAX_VERTICES);
            let mut scores = Vec::new();
            for source in 0..vertex_count {
                for target in 0..vertex_count {
                    scores.push(PairScore::new(source, target, rng.gen_range(0.0..1.0)));
                }
            }
            (vertex_count, scores)
        }
    };

    BiTreeFixture {
        vertex_count,
        scores,
        distribution,
    }
}

fn random_pairs(
    rng: &mut SmallRng,
    vertex_count: usize,
    pair_count: usize,
    mut score: impl FnMut(&mut SmallRng) -> f64,
) -> Vec<PairScore> {
    if vertex_count == 0 {
        return Vec::new();
    }
    (0..pair_count)
        .map(|_| {
            let source = rng.gen_range(0..vertex_count);
            let target = rng.gen_range(0..vertex_count);
            PairScore::new(source, target, score(rng))
        })
        .collect()
}
