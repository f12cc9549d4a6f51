//! Typed entities exchanged with the estimation stage.
//!
//! Vertices are plain `usize` indices in `[0, n)`. Decoding of string
//! encoded pairs belongs to adapters; everything here is already numeric.

/// A scored vertex pair carrying the estimate `h_uv`.
///
/// Orientation is preserved exactly as supplied, so `(u, v)` and `(v, u)`
/// are distinct entries.
///
/// # Examples
/// ```
/// use netrecover_core::PairScore;
///
/// let pair = PairScore::new(3, 1, 0.25);
/// assert_eq!(pair.endpoints(), (3, 1));
/// assert_eq!(pair.score(), 0.25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairScore {
    source: usize,
    target: usize,
    score: f64,
}

impl PairScore {
    /// Creates a pair estimate.
    #[must_use]
    pub const fn new(source: usize, target: usize, score: f64) -> Self {
        Self {
            source,
            target,
            score,
        }
    }

    /// Returns the first vertex of the pair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second vertex of the pair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the estimated dependency strength.
    #[must_use]
    #[rustfmt::skip]
    pub const fn score(&self) -> f64 { self.score }

    /// Returns `(source, target)` in supplied order.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

/// One proposed neighbour set `S` for a vertex together with `h_u,S`.
///
/// Any degree cap is the producer's responsibility; recovery only chooses
/// between candidates.
#[derive(Clone, Debug, PartialEq)]
pub struct NeighborSetCandidate {
    neighbors: Vec<usize>,
    score: f64,
}

impl NeighborSetCandidate {
    /// Creates a candidate from its members and score.
    ///
    /// # Examples
    /// ```
    /// use netrecover_core::NeighborSetCandidate;
    ///
    /// let candidate = NeighborSetCandidate::new(vec![1, 2], 0.7);
    /// assert_eq!(candidate.neighbors(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn new(neighbors: impl Into<Vec<usize>>, score: f64) -> Self {
        Self {
            neighbors: neighbors.into(),
            score,
        }
    }

    /// Returns the members of the neighbour set in supplied order.
    #[must_use]
    #[rustfmt::skip]
    pub fn neighbors(&self) -> &[usize] { &self.neighbors }

    /// Returns the estimated score of the set.
    #[must_use]
    #[rustfmt::skip]
    pub const fn score(&self) -> f64 { self.score }
}

/// An accepted `(source, target)` decision.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RecoveredEdge {
    source: usize,
    target: usize,
}

impl RecoveredEdge {
    /// Creates an edge with the given orientation.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns `(source, target)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }

    /// Returns the undirected form `(min, max)`.
    #[must_use]
    pub fn canonical(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

impl From<(usize, usize)> for RecoveredEdge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

/// Ordered output of a recovery run.
///
/// One entry per acceptance decision: duplicates and reversed orientations
/// are kept as produced.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeSet {
    edges: Vec<RecoveredEdge>,
}

impl EdgeSet {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, edge: RecoveredEdge) {
        self.edges.push(edge);
    }

    /// Returns the edges in decision order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[RecoveredEdge] { &self.edges }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the edges in decision order.
    pub fn iter(&self) -> std::slice::Iter<'_, RecoveredEdge> {
        self.edges.iter()
    }
}

impl From<Vec<RecoveredEdge>> for EdgeSet {
    fn from(edges: Vec<RecoveredEdge>) -> Self {
        Self { edges }
    }
}

impl FromIterator<RecoveredEdge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = RecoveredEdge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EdgeSet {
    type Item = RecoveredEdge;
    type IntoIter = std::vec::IntoIter<RecoveredEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a RecoveredEdge;
    type IntoIter = std::slice::Iter<'a, RecoveredEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
