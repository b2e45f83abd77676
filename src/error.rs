//! Error types for the trie-index crate.

use thiserror::Error;

/// Errors that can occur while building a [`Trie`](crate::Trie).
///
/// Queries never fail: a prefix without a matching path yields an empty
/// result. Allocation failure aborts the process and is not represented here.
#[derive(Debug, Error)]
pub enum TrieError {
    /// The same byte string appeared twice while duplicates are rejected.
    #[error("string {index} duplicates string {previous}")]
    DuplicateString { index: usize, previous: usize },

    /// Partition prefix length does not fit a bucket key.
    #[error("partition prefix length {len} exceeds maximum of {max}")]
    PrefixLengthTooLarge { len: usize, max: usize },

    /// A fixed thread count of zero was requested.
    #[error("thread count must be at least 1")]
    InvalidThreadCount,

    /// The dedicated worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias for trie construction.
pub type Result<T> = std::result::Result<T, TrieError>;
