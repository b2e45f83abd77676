//! Bucket partitioning for parallel construction.
//!
//! Strings are grouped by their first `P` bytes. Buckets come out sorted by
//! prefix, and indices inside a bucket stay in input order, so a bucket's
//! sub-trie sees duplicates in the same order the sequential build would.

use crate::error::{Result, TrieError};
use crate::key::{BucketKey, MAX_PREFIX_LEN};

/// Strings sharing one fixed-length leading byte sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    /// The shared `P`-byte prefix
    pub prefix: Vec<u8>,
    /// Indices into the input, ascending
    pub indices: Vec<usize>,
}

impl Bucket {
    /// Numeric key of this bucket's prefix.
    pub fn key(&self) -> BucketKey {
        BucketKey::from_prefix(&self.prefix)
    }

    /// Number of strings in the bucket.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if the bucket holds no strings.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Output of [`partition`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    /// Non-empty buckets in ascending prefix order
    pub buckets: Vec<Bucket>,
    /// Strings shorter than the prefix length, ascending
    pub short_indices: Vec<usize>,
}

impl Partition {
    /// Total number of strings accounted for.
    pub fn total(&self) -> usize {
        self.short_indices.len() + self.buckets.iter().map(Bucket::len).sum::<usize>()
    }
}

/// Group `strings` into buckets keyed by their first `prefix_len` bytes.
///
/// Strings shorter than `prefix_len` are listed in
/// [`Partition::short_indices`] instead. A zero `prefix_len` puts every
/// string into a single bucket with an empty prefix.
///
/// # Errors
///
/// Returns [`TrieError::PrefixLengthTooLarge`] if `prefix_len` exceeds
/// [`MAX_PREFIX_LEN`], since longer prefixes do not fit a [`BucketKey`].
pub fn partition<S: AsRef<[u8]>>(strings: &[S], prefix_len: usize) -> Result<Partition> {
    if prefix_len > MAX_PREFIX_LEN {
        return Err(TrieError::PrefixLengthTooLarge {
            len: prefix_len,
            max: MAX_PREFIX_LEN,
        });
    }

    let mut short_indices = Vec::new();
    let mut keyed: Vec<(BucketKey, usize)> = Vec::with_capacity(strings.len());

    for (index, string) in strings.iter().enumerate() {
        let bytes = string.as_ref();
        if bytes.len() < prefix_len {
            short_indices.push(index);
        } else {
            keyed.push((BucketKey::from_prefix(&bytes[..prefix_len]), index));
        }
    }

    // Stable sort keeps indices ascending within each key.
    keyed.sort_by_key(|(key, _)| *key);

    let mut buckets: Vec<Bucket> = Vec::new();
    let mut current: Option<BucketKey> = None;

    for (key, index) in keyed {
        match buckets.last_mut() {
            Some(bucket) if current == Some(key) => bucket.indices.push(index),
            _ => {
                current = Some(key);
                buckets.push(Bucket {
                    prefix: key.to_prefix(prefix_len),
                    indices: vec![index],
                });
            }
        }
    }

    Ok(Partition {
        buckets,
        short_indices,
    })
}
