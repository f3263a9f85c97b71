//! A BST where every node exclusively owns its children. This is the layout one would reach for
//! first in Rust: `Option<Box<Node>>` links, no sharing, no parent pointers.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::boxed::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.in_order().next(), None);
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//!
//! // Inserting a key that is already present does nothing.
//! tree.insert(5);
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [3, 5, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::util::Insertion;

/// An unbalanced Binary Search Tree of distinct keys. Keys can be inserted and enumerated in
/// ascending order. There is no deletion.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Sorted input makes a tree as deep as it is long, so the default recursive drop of nested
    // boxes could overflow the stack. Detach children before each node is dropped instead.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of distinct keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given key into the tree. If the tree already holds an equal key, the tree is
    /// left untouched; this is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        if self.descend_and_attach(key).grew() {
            self.len += 1;
        }
    }

    fn descend_and_attach(&mut self, key: K) -> Insertion
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 0;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return Insertion::AlreadyPresent(depth),
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        *link = Some(Node::new_boxed(key));
        Insertion::Added
    }

    /// Whether the tree holds a key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// How many nodes are on the longest path from the root to a leaf. An empty tree has a height
    /// of 0 and a degenerate tree has a height equal to its length.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node<K>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }

    /// Visits the left subtree, then the node, then the right subtree, starting at the root. The
    /// keys come out in strictly ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 1, 4] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, K> {
        let mut iter = InOrder {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// An in-order walk over a [`Tree`]. Holds one entry per level of the current path, so it uses
/// `O(height)` space.
pub struct InOrder<'a, K> {
    /// Nodes whose left subtrees are being visited. The top of the stack is the next key.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> InOrder<'a, K> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<K>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {}

impl<K> FusedIterator for InOrder<'_, K> {}
