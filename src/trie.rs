//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the trie data structure.

use std::borrow::Borrow;
use std::fmt;

use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter, IterMut, Keys, Values};
use crate::node::TrieNode;

/// A mutable trie mapping sequences of elements to values.
///
/// Keys are any iterable of elements (`"cart".chars()`, `&[1u8, 2, 3]`, a
/// `Vec<E>`), and every distinct transition along a key gets its own node.
/// Keys sharing a prefix share the nodes of that prefix.
///
/// Nodes that end a key hold a value; nodes that only lie on the way to longer
/// keys do not. [`Trie::get`] only succeeds on the former while
/// [`Trie::contains`] succeeds on both.
///
/// # Examples
///
/// ```
/// use seq_trie::Trie;
///
/// let mut trie = Trie::<char, u32>::new();
/// trie.insert("car".chars(), 1);
/// trie.insert("cart".chars(), 2);
///
/// assert_eq!(trie.get("car".chars()), Some(&1));
/// assert!(trie.contains("ca".chars()));
/// assert_eq!(trie.get("ca".chars()), None);
/// ```
#[derive(Clone)]
pub struct Trie<E, V> {
    /// The root node of the trie, which never has an element
    pub(crate) root: TrieNode<E, V>,

    /// The number of values stored in the trie
    size: usize,
}

impl<E, V> Trie<E, V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_trie::Trie;
    ///
    /// let trie = Trie::<char, i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::root(),
            size: 0,
        }
    }

    /// Returns the number of values stored in the trie.
    ///
    /// The count is maintained by every mutation, so this never walks the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every key, leaving an empty trie with its root intact.
    pub fn clear(&mut self) {
        debug_event!(len = self.size, "clearing trie");
        self.root.children.clear();
        self.root.value = None;
        self.size = 0;
    }
}

impl<E: PartialEq, V> Trie<E, V> {
    /// Returns a mutable reference to the value for `key`, storing
    /// `V::default()` there first if the key has no value yet.
    ///
    /// This always grows the tree along `key`, even when the caller only reads
    /// through the returned reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_trie::Trie;
    ///
    /// let mut counts = Trie::<char, u32>::new();
    /// for word in ["to", "tea", "to"] {
    ///     *counts.get_or_insert_default(word.chars()) += 1;
    /// }
    ///
    /// assert_eq!(counts.get("to".chars()), Some(&2));
    /// assert_eq!(counts.len(), 2);
    /// ```
    pub fn get_or_insert_default<I>(&mut self, key: I) -> &mut V
    where
        I: IntoIterator<Item = E>,
        V: Default,
    {
        let node = self.root.descend_or_create(key);
        if node.value.is_none() {
            self.size += 1;
            trace_event!(len = self.size, "stored default value");
        }
        node.value.get_or_insert_with(V::default)
    }

    /// Inserts `value` under `key` unless the key already has a value.
    ///
    /// Returns a reference to the stored value and whether `value` was written.
    /// An existing value is never overwritten; in that case `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_trie::Trie;
    ///
    /// let mut trie = Trie::<char, &str>::new();
    /// assert_eq!(trie.insert("key".chars(), "first"), (&mut "first", true));
    /// assert_eq!(trie.insert("key".chars(), "second"), (&mut "first", false));
    /// ```
    pub fn insert<I>(&mut self, key: I, value: V) -> (&mut V, bool)
    where
        I: IntoIterator<Item = E>,
    {
        let node = self.root.descend_or_create(key);
        let inserted = node.value.is_none();
        if inserted {
            self.size += 1;
            trace_event!(len = self.size, "stored value");
        }
        (node.value.get_or_insert(value), inserted)
    }

    /// Returns the value stored for `key`.
    ///
    /// `None` if the path breaks off or ends at a node without a value.
    pub fn get<I, B>(&self, key: I) -> Option<&V>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        self.root.descend(key)?.value.as_ref()
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<I, B>(&mut self, key: I) -> Option<&mut V>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        self.root.descend_mut(key)?.value.as_mut()
    }

    /// Bounds-checked lookup.
    ///
    /// Same as [`Trie::get`] but an absent key is reported as
    /// [`Error::OutOfRange`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::<char, u32>::new();
    /// trie.insert("cart".chars(), 4);
    ///
    /// assert_eq!(trie.at("cart".chars()), Ok(&4));
    /// assert_eq!(trie.at("ca".chars()), Err(Error::OutOfRange));
    /// ```
    pub fn at<I, B>(&self, key: I) -> Result<&V>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        self.get(key).ok_or(Error::OutOfRange)
    }

    /// Bounds-checked mutable lookup, failing like [`Trie::at`].
    pub fn at_mut<I, B>(&mut self, key: I) -> Result<&mut V>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        self.get_mut(key).ok_or(Error::OutOfRange)
    }

    /// Returns `true` if `key` leads to an existing node.
    ///
    /// The node does not need a value: with only `"cat"` inserted, `"ca"` is
    /// contained too. Use [`Trie::contains_key`] to ask for a stored value.
    pub fn contains<I, B>(&self, key: I) -> bool
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        self.root.descend(key).is_some()
    }

    /// Returns `true` if a value is stored for `key`.
    pub fn contains_key<I, B>(&self, key: I) -> bool
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        self.get(key).is_some()
    }

    /// Removes the value stored for `key` and returns it.
    ///
    /// Nodes left with neither a value nor children are pruned, cascading
    /// towards the root. Nodes still serving other keys are left alone, and
    /// the root itself is never removed.
    pub fn remove<I, B>(&mut self, key: I) -> Option<V>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        let removed = self.root.remove_path(key)?;
        self.size -= 1;
        trace_event!(len = self.size, "removed value");
        Some(removed)
    }

    /// Erases the value stored for `key`, returning whether there was one.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_trie::Trie;
    ///
    /// let mut trie = Trie::<char, u32>::new();
    /// trie.insert("cart".chars(), 1);
    ///
    /// assert!(!trie.erase("car".chars()));
    /// assert!(trie.erase("cart".chars()));
    /// assert!(!trie.contains("c".chars()));
    /// ```
    pub fn erase<I, B>(&mut self, key: I) -> bool
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        self.remove(key).is_some()
    }
}

impl<E: Clone, V> Trie<E, V> {
    /// Iterates over every `(key, value)` pair.
    ///
    /// The walk is depth-first: a node's own value comes before anything below
    /// it, and children are visited in the order they were first inserted.
    /// Every call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, E, V> {
        Iter::new(&self.root, Vec::new(), self.size)
    }

    /// Iterates over every `(key, value)` pair with mutable access to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, E, V> {
        IterMut::new(&mut self.root, self.size)
    }

    /// Iterates over every key, in the same order as [`Trie::iter`].
    pub fn keys(&self) -> Keys<'_, E, V> {
        Keys::new(self.iter())
    }

    /// Iterates over every value, in the same order as [`Trie::iter`].
    pub fn values(&self) -> Values<'_, E, V> {
        Values::new(self.iter())
    }
}

impl<E: Clone + PartialEq, V> Trie<E, V> {
    /// Iterates over the pairs whose key starts with `prefix`.
    ///
    /// Yielded keys are complete, prefix included. Nothing is yielded when no
    /// key passes through `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_trie::Trie;
    ///
    /// let trie: Trie<char, u32> = vec![
    ///     ("hello".chars(), 1),
    ///     ("help".chars(), 2),
    ///     ("world".chars(), 3),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let keys: Vec<String> = trie
    ///     .iter_prefix("hel".chars())
    ///     .map(|(key, _)| key.into_iter().collect())
    ///     .collect();
    /// assert_eq!(keys, vec!["hello", "help"]);
    /// ```
    pub fn iter_prefix<I, B>(&self, prefix: I) -> Iter<'_, E, V>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        let mut path = Vec::new();
        let mut current = &self.root;
        for element in prefix {
            let element: &E = element.borrow();
            match current.child(element) {
                Some(child) => {
                    path.push(element.clone());
                    current = child;
                }
                None => return Iter::empty(),
            }
        }
        Iter::new(current, path, current.subtree_size())
    }
}

impl<V> Trie<char, V> {
    /// Iterates over every pair with the key collected into a `String`.
    pub fn iter_str(&self) -> impl Iterator<Item = (String, &V)> + '_ {
        self.iter().map(|(key, value)| (key.into_iter().collect(), value))
    }
}

// Default implementation
impl<E, V> Default for Trie<E, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, V> fmt::Debug for Trie<E, V>
where
    E: Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Two tries are equal when they hold the same pairs; the insertion order of
// sibling nodes does not matter.
impl<E, V> PartialEq for Trie<E, V>
where
    E: Clone + PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }

        self.iter()
            .all(|(key, value)| other.get(key.iter()) == Some(value))
    }
}

impl<E, V> Eq for Trie<E, V>
where
    E: Clone + Eq,
    V: Eq,
{
}

impl<K, E, V> FromIterator<(K, V)> for Trie<E, V>
where
    K: IntoIterator<Item = E>,
    E: PartialEq,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K, E, V> Extend<(K, V)> for Trie<E, V>
where
    K: IntoIterator<Item = E>,
    E: PartialEq,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<E: Clone, V> IntoIterator for Trie<E, V> {
    type Item = (Vec<E>, V);
    type IntoIter = IntoIter<E, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.size)
    }
}

impl<'a, E: Clone, V> IntoIterator for &'a Trie<E, V> {
    type Item = (Vec<E>, &'a V);
    type IntoIter = Iter<'a, E, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E: Clone, V> IntoIterator for &'a mut Trie<E, V> {
    type Item = (Vec<E>, &'a mut V);
    type IntoIter = IterMut<'a, E, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
