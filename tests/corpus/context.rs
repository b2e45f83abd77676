//! Seeded corpus generation.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::BTreeSet;

/// Characters random strings are drawn from.
pub const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Deterministic source of test corpora.
pub struct CorpusContext {
    seed: u64,
    rng: StdRng,
}

impl CorpusContext {
    /// Create a new context with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get the seed for reproducibility.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One random string over [`ALPHABET`] of exactly `len` bytes.
    pub fn random_string(&mut self, len: usize) -> Vec<u8> {
        (0..len)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())])
            .collect()
    }

    /// `count` distinct random strings with lengths in `min_len..=max_len`,
    /// returned in ascending byte order.
    pub fn distinct_strings(&mut self, min_len: usize, max_len: usize, count: usize) -> Vec<Vec<u8>> {
        let mut set = BTreeSet::new();
        while set.len() < count {
            let len = self.rng.gen_range(min_len..=max_len);
            set.insert(self.random_string(len));
        }
        set.into_iter().collect()
    }

    /// Random strings in generation order, possibly repeating, drawn from a
    /// small alphabet so prefixes and duplicates are common.
    pub fn clustered_strings(&mut self, max_len: usize, count: usize) -> Vec<Vec<u8>> {
        (0..count)
            .map(|_| {
                let len = self.rng.gen_range(0..=max_len);
                (0..len).map(|_| b"abc"[self.rng.gen_range(0..3)]).collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_corpus() {
        let a = CorpusContext::new(7).distinct_strings(3, 10, 100);
        let b = CorpusContext::new(7).distinct_strings(3, 10, 100);
        assert_eq!(a, b, "Same seed should produce same corpus");
    }

    #[test]
    fn test_distinct_strings_shape() {
        let strings = CorpusContext::new(1).distinct_strings(3, 5, 200);
        assert_eq!(strings.len(), 200);
        assert!(strings.windows(2).all(|w| w[0] < w[1]));
        assert!(strings.iter().all(|s| (3..=5).contains(&s.len())));
    }
}
