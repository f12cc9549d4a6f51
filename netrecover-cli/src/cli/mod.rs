//! Command-line adapter around the recovery core.
//!
//! Decodes estimate files into typed inputs, runs one of the two recovery
//! algorithms, and renders the resulting edge list.

mod commands;
mod input;

pub use commands::{
    BiTreeArgs, Cli, CliError, Command, DegreeBoundArgs, ExecutionSummary, PolicyArg,
    render_summary, run_cli,
};
pub use input::{parse_candidates, parse_pair_scores, parse_truth};
