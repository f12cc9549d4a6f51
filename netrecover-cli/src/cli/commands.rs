use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use netrecover_core::{
    BiTreeRecovery, EdgeCorrectness, EdgeSet, ForestPolicy, RecoveryError, edge_correctness,
    recover_degree_bound_graph,
};
use thiserror::Error;
use tracing::{info, instrument};

use super::input::{parse_candidates, parse_pair_scores, parse_truth};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "netrecover",
    about = "Recover network structure from dependency estimates."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported recovery commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Grow a forest from pairwise `u v score` estimates.
    BiTree(BiTreeArgs),
    /// Choose the best neighbour set per vertex from `u score [v ...]` candidates.
    DegreeBound(DegreeBoundArgs),
}

/// Options accepted by the `bi-tree` command.
#[derive(Debug, Args, Clone)]
pub struct BiTreeArgs {
    /// File with one `u v score` estimate per line.
    pub path: PathBuf,

    /// Number of vertices in the network.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub vertices: usize,

    /// Rule deciding whether a pair joins the forest.
    #[arg(long, value_enum, default_value_t = PolicyArg::VisitedMark)]
    pub policy: PolicyArg,

    /// Ground-truth edge file used to report edge correctness.
    #[arg(long)]
    pub truth: Option<PathBuf>,
}

/// Options accepted by the `degree-bound` command.
#[derive(Debug, Args, Clone)]
pub struct DegreeBoundArgs {
    /// File with one `u score [v ...]` candidate per line.
    pub path: PathBuf,

    /// Number of vertices in the network.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub vertices: usize,

    /// Ground-truth edge file used to report edge correctness.
    #[arg(long)]
    pub truth: Option<PathBuf>,
}

/// Command-line spelling of [`ForestPolicy`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum PolicyArg {
    /// Reject a pair only when both endpoints already have an edge.
    VisitedMark,
    /// Reject a pair when it would close a cycle.
    DisjointSet,
}

impl From<PolicyArg> for ForestPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::VisitedMark => Self::VisitedMark,
            PolicyArg::DisjointSet => Self::DisjointSet,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An input line could not be decoded.
    #[error("{path}:{line}: {reason}")]
    Parse {
        /// File containing the malformed line.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The recovery core rejected the decoded input.
    #[error(transparent)]
    Core(#[from] RecoveryError),
}

/// Outcome of a recovery command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Recovered edges in decision order.
    pub edges: EdgeSet,
    /// Overlap with the ground truth, when one was supplied.
    pub correctness: Option<EdgeCorrectness>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when an input cannot be read or decoded, or when
/// the core rejects it.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netrecover_cli::cli::{BiTreeArgs, Cli, Command, PolicyArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 0.9\n1 2 0.8\n0 2 0.95\n")?;
/// let cli = Cli {
///     command: Command::BiTree(BiTreeArgs {
///         path: file.path().to_path_buf(),
///         vertices: 3,
///         policy: PolicyArg::VisitedMark,
///         truth: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.edges.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::BiTree(args) => run_bi_tree(&args),
        Command::DegreeBound(args) => run_degree_bound(&args),
    }
}

#[instrument(name = "cli.bi_tree", err, skip(args), fields(path = %args.path.display(), vertices = args.vertices))]
fn run_bi_tree(args: &BiTreeArgs) -> Result<ExecutionSummary, CliError> {
    let scores = parse_pair_scores(open_reader(&args.path)?, &args.path)?;
    info!(pairs = scores.len(), "loaded pair estimates");
    let edges = BiTreeRecovery::new(args.policy.into()).recover(args.vertices, &scores)?;
    summarise(edges, args.truth.as_deref())
}

#[instrument(name = "cli.degree_bound", err, skip(args), fields(path = %args.path.display(), vertices = args.vertices))]
fn run_degree_bound(args: &DegreeBoundArgs) -> Result<ExecutionSummary, CliError> {
    let candidates = parse_candidates(open_reader(&args.path)?, &args.path, args.vertices)?;
    info!(
        candidates = candidates.iter().map(Vec::len).sum::<usize>(),
        "loaded candidate neighbour sets"
    );
    let edges = recover_degree_bound_graph(&candidates)?;
    summarise(edges, args.truth.as_deref())
}

fn summarise(edges: EdgeSet, truth: Option<&Path>) -> Result<ExecutionSummary, CliError> {
    let correctness = match truth {
        Some(path) => {
            let truth = parse_truth(open_reader(path)?, path)?;
            Some(edge_correctness(&edges, &truth))
        }
        None => None,
    };
    info!(edges = edges.len(), "recovery finished");
    Ok(ExecutionSummary { edges, correctness })
}

fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Renders `summary` as an edge count, one `u<TAB>v` line per edge, and the
/// edge correctness when a ground truth was supplied.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netrecover_cli::cli::{ExecutionSummary, render_summary};
/// # use netrecover_core::{EdgeSet, RecoveredEdge};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     edges: EdgeSet::from(vec![RecoveredEdge::new(0, 2), RecoveredEdge::new(0, 1)]),
///     correctness: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "edges: 2\n0\t2\n0\t1\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "edges: {}", summary.edges.len())?;
    for edge in &summary.edges {
        writeln!(writer, "{}\t{}", edge.source(), edge.target())?;
    }
    if let Some(correctness) = &summary.correctness {
        match correctness.ratio() {
            Some(ratio) => writeln!(writer, "edge correctness: {ratio:.5}")?,
            None => writeln!(writer, "edge correctness: n/a (empty ground truth)")?,
        }
    }
    Ok(())
}
