//! Construction configuration.

use crate::error::{Result, TrieError};
use crate::key::{DEFAULT_PREFIX_LEN, MAX_PREFIX_LEN};

/// How many worker threads the parallel build may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadConfig {
    /// Use rayon's global pool and however many threads it has.
    #[default]
    Auto,
    /// Use a dedicated pool with exactly this many threads.
    ///
    /// `Fixed(1)` forces the sequential path.
    Fixed(usize),
}

impl ThreadConfig {
    /// Returns the number of workers construction will fan out to.
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        match self {
            ThreadConfig::Auto => rayon::current_num_threads().max(1),
            ThreadConfig::Fixed(n) => *n,
        }
    }
}

/// What to do when the same byte string is inserted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the later index at the shared terminal node.
    #[default]
    Overwrite,
    /// Fail construction with [`TrieError::DuplicateString`].
    Reject,
}

/// Options for [`Trie::build`](crate::Trie::build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Number of leading bytes used to partition the corpus into buckets.
    /// Zero disables the parallel path.
    pub partition_prefix_len: usize,
    /// Worker threads for the sub-trie build.
    pub threads: ThreadConfig,
    /// Duplicate string handling.
    pub duplicates: DuplicatePolicy,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            partition_prefix_len: DEFAULT_PREFIX_LEN,
            threads: ThreadConfig::Auto,
            duplicates: DuplicatePolicy::Overwrite,
        }
    }
}

impl BuildConfig {
    /// Creates a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Config that always builds sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self::default().with_partition_prefix_len(0)
    }

    /// Builder: set partition prefix length.
    #[must_use]
    pub fn with_partition_prefix_len(mut self, len: usize) -> Self {
        self.partition_prefix_len = len;
        self
    }

    /// Builder: set thread configuration.
    #[must_use]
    pub fn with_threads(mut self, threads: ThreadConfig) -> Self {
        self.threads = threads;
        self
    }

    /// Builder: set duplicate policy.
    #[must_use]
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Check the config before any work is done.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix length exceeds [`MAX_PREFIX_LEN`] or a
    /// fixed thread count of zero was given.
    pub fn validate(&self) -> Result<()> {
        if self.partition_prefix_len > MAX_PREFIX_LEN {
            return Err(TrieError::PrefixLengthTooLarge {
                len: self.partition_prefix_len,
                max: MAX_PREFIX_LEN,
            });
        }
        if self.threads == ThreadConfig::Fixed(0) {
            return Err(TrieError::InvalidThreadCount);
        }
        Ok(())
    }
}
