//! A BST whose nodes all live in one `Vec`. Children are indices into that `Vec` instead of
//! pointers, so the tree is a single allocation that grows by amortized pushes and is dropped in
//! one go no matter how deep it is.
//!
//! Since nothing is ever deleted, a handle stays valid for the lifetime of the tree and no
//! generation counter is needed.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::arena::Tree;
//!
//! let mut tree = Tree::new();
//!
//! for key in [-2, 0, -2, 7] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [-2, 0, 7]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::util::Insertion;

/// Index of a node in its tree's arena.
type Handle = usize;

/// The root always sits in the first slot once anything has been inserted.
const ROOT: Handle = 0;

/// An unbalanced Binary Search Tree of distinct keys backed by an arena. Keys can be inserted and
/// enumerated in ascending order. There is no deletion.
#[derive(Clone)]
pub struct Tree<K> {
    nodes: Vec<Node<K>>,
}

#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
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
        Self { nodes: Vec::new() }
    }

    /// Generate an empty `Tree` with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// The number of distinct keys in the tree. Every node is a distinct key so this is just the
    /// size of the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn root(&self) -> Option<Handle> {
        (!self.nodes.is_empty()).then_some(ROOT)
    }

    /// Inserts the given key into the tree. If the tree already holds an equal key, the tree is
    /// left untouched; this is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(5);
    /// tree.insert(5);
    /// tree.insert(5);
    /// assert_eq!(tree.in_order().collect::<Vec<_>>(), [&5]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        // `len` is the arena size, so a successful attach already counted itself.
        self.descend_and_attach(key).grew();
    }

    fn descend_and_attach(&mut self, key: K) -> Insertion
    where
        K: Ord,
    {
        let mut current = match self.root() {
            Some(root) => root,
            None => {
                self.nodes.push(Node::new(key));
                return Insertion::Added;
            }
        };

        let mut depth = 0;
        loop {
            let node = &self.nodes[current];
            let child = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Insertion::AlreadyPresent(depth),
                Ordering::Greater => node.right,
            };
            match child {
                Some(next) => {
                    current = next;
                    depth += 1;
                }
                None => break,
            }
        }

        let attached = self.nodes.len();
        let parent = &mut self.nodes[current];
        if key < parent.key {
            parent.left = Some(attached);
        } else {
            parent.right = Some(attached);
        }
        self.nodes.push(Node::new(key));
        Insertion::Added
    }

    /// Whether the tree holds a key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::arena::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&0));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(handle) = current {
            let node = &self.nodes[handle];
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return true,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// How many nodes are on the longest path from the root to a leaf. An empty tree has a height
    /// of 0 and a degenerate tree has a height equal to its length.
    pub fn height(&self) -> usize {
        // A child is always pushed after its parent, so one forward pass sees every parent's depth
        // before its children need it.
        let mut depths = vec![0; self.nodes.len()];
        let mut deepest = 0;
        for (handle, node) in self.nodes.iter().enumerate() {
            if handle == ROOT {
                depths[ROOT] = 1;
            }
            let depth = depths[handle];
            deepest = deepest.max(depth);
            for child in node.left.into_iter().chain(node.right) {
                depths[child] = depth + 1;
            }
        }
        deepest
    }

    /// Visits the left subtree, then the node, then the right subtree, starting at the root. The
    /// keys come out in strictly ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::arena::Tree;
    ///
    /// let tree: Tree<_> = [1, 2, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, K> {
        let mut iter = InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
            remaining: self.nodes.len(),
        };
        iter.push_left_spine(self.root());
        iter
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = Self::with_capacity(iter.size_hint().0);
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

/// An in-order walk over a [`Tree`]. The stack holds handles along the current path, so it uses
/// `O(height)` space.
pub struct InOrder<'a, K> {
    nodes: &'a [Node<K>],
    stack: Vec<Handle>,
    remaining: usize,
}

impl<K> InOrder<'_, K> {
    fn push_left_spine(&mut self, mut current: Option<Handle>) {
        while let Some(handle) = current {
            self.stack.push(handle);
            current = self.nodes[handle].left;
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let nodes = self.nodes;
        self.push_left_spine(nodes[handle].right);
        self.remaining -= 1;
        Some(&nodes[handle].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {}

impl<K> FusedIterator for InOrder<'_, K> {}
