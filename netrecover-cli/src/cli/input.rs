//! Line-oriented decoders for estimate files.
//!
//! Blank lines and lines starting with `#` are ignored. Tokens are split on
//! whitespace, so the encoded pair `"u v"` is simply the first two tokens.

use std::io::BufRead;
use std::path::Path;

use netrecover_core::{NeighborSetCandidate, PairScore, RecoveredEdge};

use super::commands::CliError;

/// Decodes `u v score` lines into pair estimates.
///
/// # Errors
/// Returns [`CliError::Io`] when reading fails and [`CliError::Parse`] for
/// a malformed line.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use netrecover_cli::cli::parse_pair_scores;
///
/// let scores = parse_pair_scores("0 1 0.9\n# comment\n1 2 0.8\n".as_bytes(), Path::new("h.txt"))?;
/// assert_eq!(scores.len(), 2);
/// assert_eq!(scores[1].endpoints(), (1, 2));
/// # Ok::<(), netrecover_cli::cli::CliError>(())
/// ```
pub fn parse_pair_scores(reader: impl BufRead, path: &Path) -> Result<Vec<PairScore>, CliError> {
    data_lines(reader, path)?
        .into_iter()
        .map(|line| {
            let mut tokens = Tokens::new(&line, path);
            let source = tokens.vertex("first vertex")?;
            let target = tokens.vertex("second vertex")?;
            let score = tokens.score()?;
            tokens.finish()?;
            Ok(PairScore::new(source, target, score))
        })
        .collect()
}

/// Decodes `u score [v ...]` lines into per-vertex candidate lists.
///
/// Candidates for the same vertex keep their file order. Vertices without
/// any line end up with an empty list, which the core rejects.
///
/// # Errors
/// Returns [`CliError::Parse`] for a malformed line or a vertex
/// `>= vertex_count`, and [`CliError::Io`] when reading fails.
pub fn parse_candidates(
    reader: impl BufRead,
    path: &Path,
    vertex_count: usize,
) -> Result<Vec<Vec<NeighborSetCandidate>>, CliError> {
    let mut table: Vec<Vec<NeighborSetCandidate>> = vec![Vec::new(); vertex_count];
    for line in data_lines(reader, path)? {
        let mut tokens = Tokens::new(&line, path);
        let vertex = tokens.vertex("vertex")?;
        let score = tokens.score()?;
        let neighbors = tokens.remaining_vertices()?;
        let slot = table
            .get_mut(vertex)
            .ok_or_else(|| line.error(path, format!("vertex {vertex} is not below {vertex_count}")))?;
        slot.push(NeighborSetCandidate::new(neighbors, score));
    }
    Ok(table)
}

/// Decodes `u v` lines into ground-truth edges.
///
/// # Errors
/// Returns [`CliError::Parse`] for a malformed line and [`CliError::Io`]
/// when reading fails.
pub fn parse_truth(reader: impl BufRead, path: &Path) -> Result<Vec<RecoveredEdge>, CliError> {
    data_lines(reader, path)?
        .into_iter()
        .map(|line| {
            let mut tokens = Tokens::new(&line, path);
            let source = tokens.vertex("first vertex")?;
            let target = tokens.vertex("second vertex")?;
            tokens.finish()?;
            Ok(RecoveredEdge::new(source, target))
        })
        .collect()
}

struct DataLine {
    number: usize,
    text: String,
}

impl DataLine {
    fn error(&self, path: &Path, reason: String) -> CliError {
        CliError::Parse {
            path: path.to_path_buf(),
            line: self.number,
            reason,
        }
    }
}

fn data_lines(reader: impl BufRead, path: &Path) -> Result<Vec<DataLine>, CliError> {
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let text = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(DataLine {
            number: index.saturating_add(1),
            text: trimmed.to_owned(),
        });
    }
    Ok(lines)
}

struct Tokens<'a> {
    line: &'a DataLine,
    path: &'a Path,
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a DataLine, path: &'a Path) -> Self {
        Self {
            line,
            path,
            inner: line.text.split_whitespace(),
        }
    }

    fn take(&mut self, what: &str) -> Result<&'a str, CliError> {
        self.inner
            .next()
            .ok_or_else(|| self.line.error(self.path, format!("missing {what}")))
    }

    fn vertex(&mut self, what: &str) -> Result<usize, CliError> {
        let raw = self.take(what)?;
        self.parse_vertex(raw, what)
    }

    fn parse_vertex(&self, raw: &str, what: &str) -> Result<usize, CliError> {
        raw.parse().map_err(|_| {
            self.line
                .error(self.path, format!("{what} `{raw}` is not a vertex index"))
        })
    }

    fn score(&mut self) -> Result<f64, CliError> {
        let raw = self.take("score")?;
        raw.parse()
            .map_err(|_| self.line.error(self.path, format!("score `{raw}` is not a number")))
    }

    fn remaining_vertices(&mut self) -> Result<Vec<usize>, CliError> {
        let rest: Vec<&str> = self.inner.by_ref().collect();
        rest.into_iter()
            .map(|raw| self.parse_vertex(raw, "neighbour"))
            .collect()
    }

    fn finish(&mut self) -> Result<(), CliError> {
        match self.inner.next() {
            None => Ok(()),
            Some(extra) => Err(self
                .line
                .error(self.path, format!("unexpected trailing token `{extra}`"))),
        }
    }
}
