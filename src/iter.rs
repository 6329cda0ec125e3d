//! Iterators over the entries of a trie.
//!
//! All iterators share one depth-first walk driven by an explicit stack of
//! `(node, key so far)` entries, so long keys never deepen the call stack.
//! Children are pushed in reverse so that they pop in insertion order, and a
//! node's own value is yielded before anything below it.

use std::iter::FusedIterator;

use crate::node::TrieNode;

// Extends `prefix` with the element of `child`. The root has no element, but
// the root is never pushed as a child.
fn child_key<E: Clone, V>(prefix: &[E], child: &TrieNode<E, V>) -> Vec<E> {
    let mut key = Vec::with_capacity(prefix.len() + 1);
    key.extend_from_slice(prefix);
    key.extend(child.element.iter().cloned());
    key
}

/// An iterator over the `(key, &value)` pairs of a [`Trie`](crate::Trie).
///
/// Created by [`Trie::iter`](crate::Trie::iter) and
/// [`Trie::iter_prefix`](crate::Trie::iter_prefix).
pub struct Iter<'a, E, V> {
    stack: Vec<(&'a TrieNode<E, V>, Vec<E>)>,
    remaining: usize,
}

impl<'a, E, V> Iter<'a, E, V> {
    pub(crate) fn new(start: &'a TrieNode<E, V>, key: Vec<E>, remaining: usize) -> Self {
        Iter {
            stack: vec![(start, key)],
            remaining,
        }
    }

    /// An iterator that is already exhausted.
    pub(crate) fn empty() -> Self {
        Iter {
            stack: Vec::new(),
            remaining: 0,
        }
    }
}

impl<'a, E: Clone, V> Iterator for Iter<'a, E, V> {
    type Item = (Vec<E>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, key)) = self.stack.pop() {
            for child in node.children.iter().rev() {
                self.stack.push((child, child_key(&key, child)));
            }

            if let Some(value) = &node.value {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E: Clone, V> ExactSizeIterator for Iter<'_, E, V> {}

impl<E: Clone, V> FusedIterator for Iter<'_, E, V> {}

impl<E: Clone, V> Clone for Iter<'_, E, V> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An iterator over the `(key, &mut value)` pairs of a [`Trie`](crate::Trie).
pub struct IterMut<'a, E, V> {
    stack: Vec<(&'a mut TrieNode<E, V>, Vec<E>)>,
    remaining: usize,
}

impl<'a, E, V> IterMut<'a, E, V> {
    pub(crate) fn new(root: &'a mut TrieNode<E, V>, remaining: usize) -> Self {
        IterMut {
            stack: vec![(root, Vec::new())],
            remaining,
        }
    }
}

impl<'a, E: Clone, V> Iterator for IterMut<'a, E, V> {
    type Item = (Vec<E>, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, key)) = self.stack.pop() {
            let TrieNode {
                value, children, ..
            } = node;

            for child in children.iter_mut().rev() {
                let path = child_key(&key, child);
                self.stack.push((child, path));
            }

            if let Some(value) = value.as_mut() {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E: Clone, V> ExactSizeIterator for IterMut<'_, E, V> {}

impl<E: Clone, V> FusedIterator for IterMut<'_, E, V> {}

/// An owning iterator over the `(key, value)` pairs of a [`Trie`](crate::Trie).
pub struct IntoIter<E, V> {
    stack: Vec<(TrieNode<E, V>, Vec<E>)>,
    remaining: usize,
}

impl<E, V> IntoIter<E, V> {
    pub(crate) fn new(root: TrieNode<E, V>, remaining: usize) -> Self {
        IntoIter {
            stack: vec![(root, Vec::new())],
            remaining,
        }
    }
}

impl<E: Clone, V> Iterator for IntoIter<E, V> {
    type Item = (Vec<E>, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((mut node, key)) = self.stack.pop() {
            // `TrieNode` has a custom drop, so its fields are taken, not moved out.
            for child in std::mem::take(&mut node.children).into_iter().rev() {
                let path = child_key(&key, &child);
                self.stack.push((child, path));
            }

            if let Some(value) = node.value.take() {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E: Clone, V> ExactSizeIterator for IntoIter<E, V> {}

impl<E: Clone, V> FusedIterator for IntoIter<E, V> {}

/// An iterator over the keys of a [`Trie`](crate::Trie), in traversal order.
pub struct Keys<'a, E, V> {
    inner: Iter<'a, E, V>,
}

impl<'a, E, V> Keys<'a, E, V> {
    pub(crate) fn new(inner: Iter<'a, E, V>) -> Self {
        Keys { inner }
    }
}

impl<E: Clone, V> Iterator for Keys<'_, E, V> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: Clone, V> ExactSizeIterator for Keys<'_, E, V> {}

/// An iterator over the values of a [`Trie`](crate::Trie), in traversal order.
pub struct Values<'a, E, V> {
    inner: Iter<'a, E, V>,
}

impl<'a, E, V> Values<'a, E, V> {
    pub(crate) fn new(inner: Iter<'a, E, V>) -> Self {
        Values { inner }
    }
}

impl<'a, E: Clone, V> Iterator for Values<'a, E, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: Clone, V> ExactSizeIterator for Values<'_, E, V> {}
