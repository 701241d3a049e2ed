//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A polygon ring is not closed where the cutting path requires it to be.
    /// Rings are only silently closed on the deserialization path (see
    /// [`crate::ring::close_ring`]); the cutter expects well-formed input.
    #[error("polygon ring is not closed")]
    MalformedRing,

    /// A ring with fewer than 3 distinct vertices has no orientation.
    #[error("ring has {vertices} distinct vertices, at least 3 required")]
    DegenerateRing {
        /// Number of distinct vertices found in the ring.
        vertices: usize,
    },

    /// An empty sequence cannot be merged.
    #[error("zero-length sequence cannot be merged")]
    EmptyMerge,

    /// No rule exists to merge the given combination of objects.
    #[error("no rule to merge {0}")]
    IncompatibleMerge(String),
}

/// Result alias with the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
