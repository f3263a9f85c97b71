//! This crate exposes an unbalanced Binary Search Tree (BST) in two memory
//! layouts, mostly for educational purposes, plus the console loop that
//! feeds it integers.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores keys in `Node`s. Each `Node` has at most two
//! children and the tree keeps one invariant:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that equal keys are never stored twice. Inserting a key that is
//! > already present does nothing.
//!
//! Visiting the left subtree, then the subtree root, then the right subtree
//! (an "in-order" traversal) yields the keys in ascending order.
//!
//! Nothing here rebalances. Inserting keys in sorted order produces a
//! "degenerate" tree shaped like a linked list, with a height equal to the
//! number of keys. Both trees insert and traverse without recursion so that
//! shape never threatens the call stack.
//!
//! ## Layouts
//!
//! - [`boxed::Tree`]: every node exclusively owns its children through
//!   `Option<Box<Node>>`.
//! - [`arena::Tree`]: every node lives in one `Vec` and children are indices
//!   into it.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod arena;
pub mod boxed;
pub mod console;
mod util;
