//! Internal node implementation for the trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of the
//! trie. Every node owns its children outright: there is no sharing and there
//! are no parent links.
//!
//! Keys have no length limit, so nothing here recurses once per key element:
//! walks, removal, cloning and dropping all run off explicit stacks.

use std::borrow::Borrow;

/// One position along one or more inserted keys.
///
/// Each node records the single element that leads to it from its parent, an
/// optional value and an ordered list of children. A node with a value marks
/// the end of a complete key; a node without one is an intermediate path node.
#[derive(Debug)]
pub struct TrieNode<E, V> {
    /// The element this node matches against its parent.
    ///
    /// Only the root has `None`; it is never compared.
    pub element: Option<E>,

    /// The value stored at this node, if any
    pub value: Option<V>,

    /// Child nodes in insertion order, unique by `element`
    pub children: Vec<TrieNode<E, V>>,
}

impl<E, V> TrieNode<E, V> {
    /// Creates the root node, which has no element.
    pub fn root() -> Self {
        TrieNode {
            element: None,
            value: None,
            children: Vec::new(),
        }
    }

    /// Creates a new empty node reached through `element`
    pub fn new(element: E) -> Self {
        TrieNode {
            element: Some(element),
            value: None,
            children: Vec::new(),
        }
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node with neither a value nor children serves no key and must be
    /// removed from its parent.
    #[cfg(test)]
    pub fn is_prunable(&self) -> bool {
        self.value.is_none() && self.is_leaf()
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.value.is_some() {
                count += 1;
            }
            stack.extend(node.children.iter());
        }

        count
    }

    /// Returns the number of nodes in this subtree, this node included.
    #[cfg(test)]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

// Dropping a long chain through the derived glue would recurse once per level.
impl<E, V> Drop for TrieNode<E, V> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl<E: Clone, V: Clone> Clone for TrieNode<E, V> {
    /// Copies the subtree bottom-up: a node is assembled once all of its
    /// children have been copied, keeping their order.
    fn clone(&self) -> Self {
        let mut pending: Vec<(&Self, Vec<Self>)> = Vec::new();
        let mut current = (self, Vec::with_capacity(self.children.len()));

        loop {
            let (source, copied) = current;

            if let Some(child) = source.children.get(copied.len()) {
                pending.push((source, copied));
                current = (child, Vec::with_capacity(child.children.len()));
                continue;
            }

            let node = TrieNode {
                element: source.element.clone(),
                value: source.value.clone(),
                children: copied,
            };

            match pending.pop() {
                Some((parent, mut siblings)) => {
                    siblings.push(node);
                    current = (parent, siblings);
                }
                None => return node,
            }
        }
    }
}

impl<E: PartialEq, V> TrieNode<E, V> {
    /// Index of the child reached through `element`.
    pub fn position(&self, element: &E) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.element.as_ref() == Some(element))
    }

    /// Returns the child reached through `element`.
    pub fn child(&self, element: &E) -> Option<&Self> {
        self.position(element).map(|index| &self.children[index])
    }

    /// Returns the child reached through `element`, mutably.
    pub fn child_mut(&mut self, element: &E) -> Option<&mut Self> {
        let index = self.position(element)?;
        Some(&mut self.children[index])
    }

    /// Returns the child reached through `element`, appending a new empty one
    /// when there is none yet.
    pub fn child_or_insert(&mut self, element: E) -> &mut Self {
        let index = match self.position(&element) {
            Some(index) => index,
            None => {
                self.children.push(TrieNode::new(element));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Follows `key` from this node without creating anything.
    pub fn descend<I, B>(&self, key: I) -> Option<&Self>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        let mut current = self;
        for element in key {
            current = current.child(element.borrow())?;
        }
        Some(current)
    }

    /// Follows `key` from this node without creating anything, mutably.
    pub fn descend_mut<I, B>(&mut self, key: I) -> Option<&mut Self>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        let mut current = self;
        for element in key {
            current = current.child_mut(element.borrow())?;
        }
        Some(current)
    }

    /// Follows `key` from this node, creating every missing node on the way.
    pub fn descend_or_create<I>(&mut self, key: I) -> &mut Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut current = self;
        for element in key {
            current = current.child_or_insert(element);
        }
        current
    }

    /// Takes the value at the end of `key` and prunes every node left without
    /// a value and without children, cascading towards this node.
    ///
    /// The child index taken at each level is recorded on the way down. Once
    /// the value is gone, the trailing run of nodes that only carried the
    /// removed key is cut off at its top in a single step. The node this is
    /// called on is never removed.
    pub fn remove_path<I, B>(&mut self, key: I) -> Option<V>
    where
        I: IntoIterator<Item = B>,
        B: Borrow<E>,
    {
        let mut path = Vec::new();
        let mut current = &mut *self;
        for element in key {
            let index = current.position(element.borrow())?;
            path.push(index);
            current = &mut current.children[index];
        }
        let removed = current.value.take()?;

        // Shallowest depth from which every node down to the end of the path
        // has no value and no branch other than the path itself.
        let mut cut = None;
        let mut node = &*self;
        for (depth, &index) in path.iter().enumerate() {
            node = &node.children[index];
            let only_path = if depth + 1 == path.len() {
                node.is_leaf()
            } else {
                node.children.len() == 1
            };
            if node.value.is_none() && only_path {
                if cut.is_none() {
                    cut = Some(depth);
                }
            } else {
                cut = None;
            }
        }

        if let Some(depth) = cut {
            let mut parent = &mut *self;
            for &index in &path[..depth] {
                parent = &mut parent.children[index];
            }
            parent.children.remove(path[depth]);
            trace_event!(depth, pruned = path.len() - depth, "pruned empty branch");
        }

        Some(removed)
    }
}
