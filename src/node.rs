//! Trie vertex.
//!
//! A [`Node`] owns its children exclusively through `Box`es stored in a small
//! unsorted list. Fan-out is usually low, so lookups are a linear scan rather
//! than a 256-slot table.

use std::fmt;
use std::mem;

/// A child edge: the byte label and the owned child node.
type Edge = (u8, Box<Node>);

/// A single trie vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    /// Labelled children, unique keys, insertion order
    children: Vec<Edge>,
    /// Index of the input string that ends exactly here
    terminal: Option<usize>,
}

impl Node {
    /// Create an empty node with no children and no terminal index.
    pub const fn new() -> Self {
        Self {
            children: Vec::new(),
            terminal: None,
        }
    }

    fn position(&self, key: u8) -> Option<usize> {
        self.children.iter().position(|(k, _)| *k == key)
    }

    /// Get the child stored under `key`.
    pub fn child(&self, key: u8) -> Option<&Node> {
        self.children
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, child)| child.as_ref())
    }

    /// Get mutable access to the child stored under `key`.
    pub fn child_mut(&mut self, key: u8) -> Option<&mut Node> {
        self.children
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, child)| child.as_mut())
    }

    /// Get the child under `key`, attaching a new empty one if missing.
    ///
    /// The flag is `true` when a node was created.
    pub fn child_or_create(&mut self, key: u8) -> (&mut Node, bool) {
        match self.position(key) {
            Some(pos) => (self.children[pos].1.as_mut(), false),
            None => {
                self.children.push((key, Box::new(Node::new())));
                let last = self.children.len() - 1;
                (self.children[last].1.as_mut(), true)
            }
        }
    }

    /// Store `child` under `key`, taking ownership.
    ///
    /// Returns the child previously stored under `key`, if any. Used to
    /// transplant whole sub-trees without copying them.
    pub fn set_child(&mut self, key: u8, child: Box<Node>) -> Option<Box<Node>> {
        match self.position(key) {
            Some(pos) => Some(mem::replace(&mut self.children[pos].1, child)),
            None => {
                self.children.push((key, child));
                None
            }
        }
    }

    /// Iterate over `(key, child)` pairs in list order.
    pub fn children(&self) -> impl Iterator<Item = (u8, &Node)> + '_ {
        self.children.iter().map(|(k, child)| (*k, child.as_ref()))
    }

    /// Number of outgoing edges.
    pub fn fan_out(&self) -> usize {
        self.children.len()
    }

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Index of the input string ending at this node.
    pub fn terminal_index(&self) -> Option<usize> {
        self.terminal
    }

    /// Mark this node as the end of string `index`.
    ///
    /// Last write wins: the previous index, if any, is returned.
    pub fn set_terminal_index(&mut self, index: usize) -> Option<usize> {
        self.terminal.replace(index)
    }

    /// Walk down `prefix` one byte at a time.
    ///
    /// Returns `None` as soon as a byte has no matching child. The empty
    /// prefix yields `self`.
    pub fn descend(&self, prefix: &[u8]) -> Option<&Node> {
        prefix
            .iter()
            .try_fold(self, |node, &byte| node.child(byte))
    }

    /// Append every terminal index in this subtree to `out`.
    ///
    /// Own terminal first, then each child in list order. The order is
    /// deterministic for a given tree shape but not lexicographic.
    pub fn collect_terminals(&self, out: &mut Vec<usize>) {
        if let Some(index) = self.terminal {
            out.push(index);
        }
        for (_, child) in &self.children {
            child.collect_terminals(out);
        }
    }

    /// Number of terminal indices in this subtree.
    pub fn count_terminals(&self) -> usize {
        usize::from(self.terminal.is_some())
            + self
                .children
                .iter()
                .map(|(_, child)| child.count_terminals())
                .sum::<usize>()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.subtree_node_count())
            .sum::<usize>()
    }

    /// Approximate heap and inline bytes held by this subtree.
    ///
    /// Counts this node, its child-list entries and every child recursively.
    /// Spare `Vec` capacity is not included.
    pub fn memory_footprint(&self) -> usize {
        mem::size_of::<Node>()
            + self.children.len() * mem::size_of::<Edge>()
            + self
                .children
                .iter()
                .map(|(_, child)| child.memory_footprint())
                .sum::<usize>()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self.terminal {
            Some(index) => writeln!(f, "Node [{index}]")?,
            None => writeln!(f, "Node")?,
        }
        for (key, child) in &self.children {
            write!(f, "{:width$}", "", width = (depth + 1) * 2)?;
            write!(f, "{:?} ({key}): ", char::from(*key))?;
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
