//! Bucket key types and utilities.
//!
//! A bucket key is the leading `P` bytes of a string read as a big-endian
//! base-256 number. Ordering keys numerically is the same as ordering the
//! prefixes lexicographically, which the coarsening merge relies on.

use std::fmt;

/// Largest partition prefix length whose keys fit in a `u64`.
pub const MAX_PREFIX_LEN: usize = 8;

/// Default number of leading bytes used to partition the corpus.
pub const DEFAULT_PREFIX_LEN: usize = 2;

/// Numeric bucket key derived from a fixed-length byte prefix.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BucketKey(pub u64);

impl BucketKey {
    /// Create a key from raw prefix bytes.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` is longer than [`MAX_PREFIX_LEN`].
    pub fn from_prefix(prefix: &[u8]) -> Self {
        assert!(
            prefix.len() <= MAX_PREFIX_LEN,
            "prefix of {} bytes does not fit a bucket key",
            prefix.len()
        );
        Self(
            prefix
                .iter()
                .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte)),
        )
    }

    /// Reconstruct the `len`-byte prefix this key was computed from.
    ///
    /// # Panics
    ///
    /// Panics if `len` is larger than [`MAX_PREFIX_LEN`].
    pub fn to_prefix(self, len: usize) -> Vec<u8> {
        assert!(len <= MAX_PREFIX_LEN, "bucket keys hold at most 8 bytes");
        (0..len)
            .rev()
            .map(|shift| (self.0 >> (shift * 8)) as u8)
            .collect()
    }

    /// Get the underlying number.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BucketKey(0x{:x})", self.0)
    }
}

impl From<u64> for BucketKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
