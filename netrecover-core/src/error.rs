//! Error types for structure recovery.
//!
//! Every variant describes malformed input from the estimation stage. Ties
//! between scores are never errors.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Validation failure raised before any edge is emitted.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RecoveryError {
    /// A pair endpoint or neighbour-set member lies outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A vertex was given no candidate neighbour sets to choose from.
    #[error("vertex {vertex} has no candidate neighbour sets")]
    EmptyCandidateList {
        /// Vertex whose candidate list is empty.
        vertex: usize,
    },
    /// A pairwise estimate was NaN or infinite.
    #[error("pair ({first}, {second}) has a non-finite score")]
    NonFinitePairScore {
        /// First vertex of the pair, as supplied.
        first: usize,
        /// Second vertex of the pair, as supplied.
        second: usize,
    },
    /// A candidate neighbour-set estimate was NaN or infinite.
    #[error("candidate {candidate} of vertex {vertex} has a non-finite score")]
    NonFiniteCandidateScore {
        /// Vertex owning the candidate.
        vertex: usize,
        /// Position of the candidate in the vertex's list.
        candidate: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`RecoveryError`] variants.
    enum RecoveryErrorCode for RecoveryError {
        /// A vertex index was out of range.
        VertexOutOfRange => VertexOutOfRange { .. } => "VERTEX_OUT_OF_RANGE",
        /// A vertex had no candidate neighbour sets.
        EmptyCandidateList => EmptyCandidateList { .. } => "EMPTY_CANDIDATE_LIST",
        /// A pairwise estimate was not finite.
        NonFinitePairScore => NonFinitePairScore { .. } => "NON_FINITE_PAIR_SCORE",
        /// A candidate estimate was not finite.
        NonFiniteCandidateScore => NonFiniteCandidateScore { .. } => "NON_FINITE_CANDIDATE_SCORE",
    }
}

/// Convenient alias for results returned by the recovery API.
pub type Result<T> = core::result::Result<T, RecoveryError>;
