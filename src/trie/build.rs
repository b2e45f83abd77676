//! Bulk construction: sequential fallback and the partitioned parallel build.
//!
//! The partitioned build runs in three phases:
//!
//! 1. [`partition`] groups strings by their first `P` bytes into buckets
//!    sorted by prefix.
//! 2. Each bucket becomes an independent [`Trie`] built on the rayon pool,
//!    with the shared prefix skipped.
//! 3. `P` coarsening rounds each drop the last prefix byte and merge runs of
//!    adjacent buckets that now share a prefix under a fresh parent root.
//!
//! Strings shorter than `P` are inserted last, from the root.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::bucket::{partition, Bucket, Partition};
use crate::config::{BuildConfig, DuplicatePolicy, ThreadConfig};
use crate::error::Result;

use super::Trie;

/// A sub-trie together with the prefix its root currently stands for.
struct PrefixedTrie {
    prefix: Vec<u8>,
    trie: Trie,
}

impl Trie {
    /// Build a trie over `strings` according to `config`.
    ///
    /// Falls back to sequential insertion when the partition prefix length
    /// is zero or only one worker is available. Either way the result
    /// answers every query identically.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid, if a dedicated worker pool
    /// cannot be created, or if a duplicate string is found under
    /// [`DuplicatePolicy::Reject`].
    #[tracing::instrument(level = "debug", skip_all, fields(strings = strings.len()))]
    pub fn build<S: AsRef<[u8]> + Sync>(strings: &[S], config: &BuildConfig) -> Result<Self> {
        config.validate()?;

        let prefix_len = config.partition_prefix_len;
        let workers = config.threads.effective_threads();

        if prefix_len == 0 || workers == 1 {
            debug!(prefix_len, workers, "building sequentially");
            return Self::build_sequential(strings, config.duplicates);
        }

        match config.threads {
            ThreadConfig::Auto => Self::build_partitioned(strings, prefix_len, config.duplicates),
            ThreadConfig::Fixed(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                pool.install(|| Self::build_partitioned(strings, prefix_len, config.duplicates))
            }
        }
    }

    fn build_sequential<S: AsRef<[u8]>>(strings: &[S], policy: DuplicatePolicy) -> Result<Self> {
        let mut trie = Self::new();
        for index in 0..strings.len() {
            trie.insert_checked(strings, index, 0, policy)?;
        }
        debug!(nodes = trie.node_count, "sequential build complete");
        Ok(trie)
    }

    fn build_partitioned<S: AsRef<[u8]> + Sync>(
        strings: &[S],
        prefix_len: usize,
        policy: DuplicatePolicy,
    ) -> Result<Self> {
        let Partition {
            buckets,
            short_indices,
        } = partition(strings, prefix_len)?;
        debug!(
            prefix_len,
            buckets = buckets.len(),
            short_strings = short_indices.len(),
            "partitioned corpus"
        );

        let tries = Self::build_bucket_tries(strings, &buckets, prefix_len, policy)?;

        let mut level: Vec<PrefixedTrie> = buckets
            .into_iter()
            .zip(tries)
            .map(|(bucket, trie)| PrefixedTrie {
                prefix: bucket.prefix,
                trie,
            })
            .collect();

        for round in 0..prefix_len {
            level = coarsen(level);
            trace!(round, remaining = level.len(), "coarsening round complete");
        }
        debug_assert!(level.len() <= 1);

        let mut trie = level.pop().map(|merged| merged.trie).unwrap_or_default();

        for index in short_indices {
            trie.insert_checked(strings, index, 0, policy)?;
        }

        debug!(nodes = trie.node_count, "partitioned build complete");
        Ok(trie)
    }

    /// Build one sub-trie per bucket on the current rayon pool.
    ///
    /// Output order matches `buckets`; each task writes only its own trie.
    fn build_bucket_tries<S: AsRef<[u8]> + Sync>(
        strings: &[S],
        buckets: &[Bucket],
        skip: usize,
        policy: DuplicatePolicy,
    ) -> Result<Vec<Self>> {
        buckets
            .par_iter()
            .map(|bucket| -> Result<Self> {
                let mut trie = Self::new();
                for &index in &bucket.indices {
                    trie.insert_checked(strings, index, skip, policy)?;
                }
                Ok(trie)
            })
            .collect()
    }
}

/// One coarsening round.
///
/// Drops the last byte of every prefix and merges each run of adjacent
/// entries that now share a prefix into a new trie, whose root adopts the
/// run's roots keyed by the dropped byte. Relies on `level` being sorted by
/// prefix, so a single forward scan finds every run. An empty level stays
/// empty.
fn coarsen(level: Vec<PrefixedTrie>) -> Vec<PrefixedTrie> {
    let mut merged: Vec<PrefixedTrie> = Vec::with_capacity(level.len());

    for PrefixedTrie { mut prefix, trie } in level {
        let Some(key) = prefix.pop() else {
            // Already at the root prefix; nothing left to merge on.
            merged.push(PrefixedTrie { prefix, trie });
            continue;
        };

        match merged.last_mut() {
            Some(parent) if parent.prefix == prefix => parent.trie.graft(key, trie),
            _ => {
                let mut parent = Trie::new();
                parent.graft(key, trie);
                merged.push(PrefixedTrie {
                    prefix,
                    trie: parent,
                });
            }
        }
    }

    merged
}
