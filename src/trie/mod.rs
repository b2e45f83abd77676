//! Main trie implementation.
//!
//! This module provides [`Trie`], an immutable-after-build prefix index over
//! a corpus of byte strings. Search results are indices into the corpus the
//! trie was built from.
//!
//! # Construction
//!
//! | Path        | When                                   | Work                          |
//! |-------------|----------------------------------------|-------------------------------|
//! | Sequential  | `P == 0` or a single worker            | one insert per string         |
//! | Partitioned | otherwise                              | partition, parallel sub-tries, `P` merge rounds |
//!
//! Both paths answer every query identically.

mod build;
mod search;

use std::fmt;
use std::mem;

use crate::config::DuplicatePolicy;
use crate::error::{Result, TrieError};
use crate::Node;

/// A prefix index over byte strings.
///
/// The root is boxed so that a whole trie can be handed to a parent during
/// the merge phase of parallel construction without copying any node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trie {
    /// Root node; the empty string's position
    root: Box<Node>,
    /// Number of nodes reachable from the root, root included
    node_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie holding only a root node.
    pub fn new() -> Self {
        Self {
            root: Box::new(Node::new()),
            node_count: 1,
        }
    }

    /// Build a trie by inserting every string in input order.
    ///
    /// Duplicate strings keep the later index.
    pub fn sequential<S: AsRef<[u8]>>(strings: &[S]) -> Self {
        let mut trie = Self::new();
        for index in 0..strings.len() {
            trie.insert(strings, index);
        }
        trie
    }

    /// Insert `strings[index]` from the root.
    ///
    /// Returns the index that previously ended at the same node, which is
    /// overwritten.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `strings`.
    pub fn insert<S: AsRef<[u8]>>(&mut self, strings: &[S], index: usize) -> Option<usize> {
        self.insert_bytes(strings[index].as_ref(), index)
    }

    /// Insert `strings[index]` ignoring its first `skip` bytes.
    ///
    /// Used for bucket sub-tries, whose root stands for the bucket prefix.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or the string is shorter than `skip`.
    pub fn insert_skipping<S: AsRef<[u8]>>(
        &mut self,
        strings: &[S],
        index: usize,
        skip: usize,
    ) -> Option<usize> {
        self.insert_bytes(&strings[index].as_ref()[skip..], index)
    }

    fn insert_bytes(&mut self, bytes: &[u8], index: usize) -> Option<usize> {
        let mut current: &mut Node = &mut self.root;
        for &byte in bytes {
            let (child, created) = current.child_or_create(byte);
            if created {
                self.node_count += 1;
            }
            current = child;
        }
        current.set_terminal_index(index)
    }

    /// Insert and apply `policy` to an overwritten terminal.
    fn insert_checked<S: AsRef<[u8]>>(
        &mut self,
        strings: &[S],
        index: usize,
        skip: usize,
        policy: DuplicatePolicy,
    ) -> Result<()> {
        match self.insert_skipping(strings, index, skip) {
            Some(previous) if policy == DuplicatePolicy::Reject => {
                Err(TrieError::DuplicateString { index, previous })
            }
            _ => Ok(()),
        }
    }

    /// Attach `child`'s root under `key` of this trie's root.
    ///
    /// The child's nodes are moved, not copied.
    fn graft(&mut self, key: u8, child: Trie) {
        let child_nodes = child.node_count;
        let displaced = self.root.set_child(key, child.into_root());
        debug_assert!(displaced.is_none(), "bucket prefixes must be unique");
        self.node_count += child_nodes;
    }

    /// The root node, for inspection.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Consume the trie and hand out its root.
    pub fn into_root(self) -> Box<Node> {
        self.root
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of strings that can be found, after duplicates collapsed.
    pub fn len(&self) -> usize {
        self.root.count_terminals()
    }

    /// Check if no string ends anywhere in the trie.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf() && self.root.terminal_index().is_none()
    }

    /// Approximate bytes held by the trie. Informational only.
    pub fn memory_footprint(&self) -> usize {
        mem::size_of::<Self>() + self.root.memory_footprint()
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
