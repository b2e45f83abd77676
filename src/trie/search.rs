//! Read-only queries on a built [`Trie`].

use super::Trie;

impl Trie {
    /// Indices of all strings starting with `prefix`.
    ///
    /// The empty prefix returns every index. The order follows the tree
    /// traversal and is not sorted; compare results as sets or use
    /// [`Trie::search_sorted`].
    #[must_use]
    pub fn search(&self, prefix: impl AsRef<[u8]>) -> Vec<usize> {
        let mut indices = Vec::new();
        if let Some(node) = self.root.descend(prefix.as_ref()) {
            node.collect_terminals(&mut indices);
        }
        indices
    }

    /// Like [`Trie::search`] with the indices in ascending order.
    #[must_use]
    pub fn search_sorted(&self, prefix: impl AsRef<[u8]>) -> Vec<usize> {
        let mut indices = self.search(prefix);
        indices.sort_unstable();
        indices
    }

    /// Index of the string exactly equal to `string`.
    #[must_use]
    pub fn get(&self, string: impl AsRef<[u8]>) -> Option<usize> {
        self.root
            .descend(string.as_ref())
            .and_then(|node| node.terminal_index())
    }

    /// Check if any node lies on the path `prefix`.
    ///
    /// Every node is on the path of some inserted string, so this is true
    /// exactly when [`Trie::search`] would return something.
    pub fn contains_prefix(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.root.descend(prefix.as_ref()).is_some()
    }

    /// Number of strings starting with `prefix`, without collecting them.
    pub fn count_prefix(&self, prefix: impl AsRef<[u8]>) -> usize {
        self.root
            .descend(prefix.as_ref())
            .map_or(0, |node| node.count_terminals())
    }
}
