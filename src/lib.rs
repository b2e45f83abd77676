//! # trie-index
//!
//! An in-memory prefix index over a corpus of byte strings.
//!
//! A [`Trie`] maps every input string to its index in the corpus and answers
//! "which strings start with this prefix" by walking the prefix and
//! collecting every terminal index below it.
//!
//! ## Construction
//!
//! Building sequentially is one insert per string. [`Trie::build`] can
//! instead fan the work out over rayon:
//!
//! - **Partition**: strings are bucketed by their first `P` bytes, buckets
//!   sorted by prefix; shorter strings are set aside
//! - **Build**: each bucket becomes an independent sub-trie, in parallel
//! - **Coarsen**: `P` rounds merge neighbouring sub-tries under a shared
//!   parent, moving their roots rather than copying nodes
//! - **Leftovers**: the short strings are inserted into the merged trie
//!
//! The result answers every query exactly like the sequential build.
//!
//! ## Example
//!
//! ```
//! use trie_index::{BuildConfig, Trie};
//!
//! let words = ["wetter", "hallo", "hello", "welt", "world", "haus"];
//! let trie = Trie::build(&words, &BuildConfig::default()).unwrap();
//!
//! assert_eq!(trie.search_sorted("ha"), vec![1, 5]);
//! assert_eq!(trie.search_sorted("we"), vec![0, 3]);
//! assert!(trie.search("x").is_empty());
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod bucket;
mod config;
mod error;
mod key;
mod node;
mod trie;

pub use bucket::{partition, Bucket, Partition};
pub use config::{BuildConfig, DuplicatePolicy, ThreadConfig};
pub use error::{Result, TrieError};
pub use key::{BucketKey, DEFAULT_PREFIX_LEN, MAX_PREFIX_LEN};
pub use node::Node;
pub use trie::Trie;
