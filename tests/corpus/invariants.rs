//! Invariant checking against a linear-scan reference.
//!
//! The key invariant: for every prefix, the trie returns exactly the set of
//! indices the reference finds by scanning the whole corpus.

use std::collections::BTreeSet;
use trie_index::Trie;

/// A mismatch between the trie and the reference.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    pub prefix: Vec<u8>,
    pub description: String,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invariant violation for prefix {:?}: {} (expected: {}, actual: {})",
            String::from_utf8_lossy(&self.prefix),
            self.description,
            self.expected,
            self.actual
        )
    }
}

impl std::error::Error for InvariantViolation {}

/// Reference prefix index that scans the corpus on every query.
///
/// Duplicate strings resolve to their last occurrence, matching the trie's
/// overwrite behaviour.
pub struct ReferenceIndex<'a> {
    strings: &'a [Vec<u8>],
}

impl<'a> ReferenceIndex<'a> {
    pub fn new(strings: &'a [Vec<u8>]) -> Self {
        Self { strings }
    }

    pub fn search(&self, prefix: &[u8]) -> BTreeSet<usize> {
        self.strings
            .iter()
            .enumerate()
            .filter(|(_, s)| s.starts_with(prefix))
            .filter(|(i, s)| !self.strings[i + 1..].contains(*s))
            .map(|(i, _)| i)
            .collect()
    }

    /// Compare one prefix query.
    pub fn verify(&self, trie: &Trie, prefix: &[u8]) -> Result<usize, InvariantViolation> {
        let expected = self.search(prefix);
        let found = trie.search(prefix);
        let actual: BTreeSet<usize> = found.iter().copied().collect();

        if found.len() != actual.len() {
            return Err(InvariantViolation {
                prefix: prefix.to_vec(),
                description: "Search returned an index twice".to_string(),
                expected: format!("{} distinct", actual.len()),
                actual: format!("{} results", found.len()),
            });
        }

        if actual != expected {
            return Err(InvariantViolation {
                prefix: prefix.to_vec(),
                description: "Search result mismatch".to_string(),
                expected: format!("{} indices", expected.len()),
                actual: format!(
                    "{} indices, {} missing, {} extra",
                    actual.len(),
                    expected.difference(&actual).count(),
                    actual.difference(&expected).count()
                ),
            });
        }

        Ok(expected.len())
    }

    /// Check every prefix, collecting all violations.
    pub fn verify_all<'p>(
        &self,
        trie: &Trie,
        prefixes: impl IntoIterator<Item = &'p [u8]>,
    ) -> Vec<InvariantViolation> {
        prefixes
            .into_iter()
            .filter_map(|prefix| self.verify(trie, prefix).err())
            .collect()
    }
}
