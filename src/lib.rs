//! # Sequence Trie
//!
//! A mutable prefix tree mapping sequences of elements (characters, bytes, any
//! `PartialEq` type) to values.
//!
//! Every distinct element transition along a key gets its own node, and keys
//! that share a prefix share the nodes of that prefix. A node marks the end of
//! a key only when it holds a value, so the trie tells apart keys that were
//! inserted from paths that merely lead to longer keys.
//!
//! ## Features
//!
//! - **First-insert-wins**: [`Trie::insert`] never overwrites an existing value
//! - **Two kinds of membership**: [`Trie::contains`] accepts any existing path,
//!   [`Trie::contains_key`] only paths holding a value
//! - **Pruning erasure**: erasing a key removes every node left without a value
//!   and without children
//! - **Ordered traversal**: depth-first, values before descendants, children in
//!   insertion order, driven by an explicit stack
//! - **Optional integrations**: `serde` support and `tracing` events behind
//!   Cargo features of the same name
//!
//! ## Example
//!
//! ```rust
//! use seq_trie::Trie;
//!
//! let mut trie = Trie::<char, u32>::new();
//! trie.insert("car".chars(), 1);
//! trie.insert("cart".chars(), 2);
//!
//! assert_eq!(trie.get("car".chars()), Some(&1));
//!
//! // Erasing "car" keeps the node, which "cart" still runs through.
//! assert!(trie.erase("car".chars()));
//! assert!(trie.contains("car".chars()));
//! assert_eq!(trie.get("car".chars()), None);
//! assert_eq!(trie.get("cart".chars()), Some(&2));
//! ```
//!
//! ## Empty keys
//!
//! The empty key addresses the root. It can hold a value like any other key,
//! and that value counts towards [`Trie::len`]. Since the root always exists,
//! [`Trie::contains`] is always `true` for the empty key.

#[macro_use]
mod macros;

mod error;
pub mod iter;
mod node;
#[cfg(feature = "serde")]
mod serde;
mod trie;

#[cfg(test)]
mod qc_test;

// Re-export public types
pub use crate::error::{Error, Result};
pub use crate::iter::{IntoIter, Iter, IterMut, Keys, Values};
pub use crate::trie::Trie;

/// A [`Trie`] keyed by strings, one node per `char`.
///
/// ```rust
/// use seq_trie::StrTrie;
///
/// let mut trie = StrTrie::<usize>::new();
/// trie.insert("hello".chars(), 5);
/// assert_eq!(trie.iter_str().next(), Some(("hello".to_string(), &5)));
/// ```
pub type StrTrie<V> = Trie<char, V>;
