//! Benchmark support crate for netrecover.
//!
//! Generates seeded synthetic estimates for the Criterion benchmarks of
//! both recovery algorithms.

pub mod params;
pub mod synthetic;
