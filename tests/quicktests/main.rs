//! Property tests shared by every tree layout. Each layout module runs the same checks against
//! a `BTreeSet` model through the `Tree` trait below.

#[macro_use]
extern crate quickcheck_macros;

mod boxed;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Compare in-order traversals
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// The part of a tree's API the properties need.
pub trait Tree<K>: Default {
    fn insert(&mut self, key: K);
    fn keys(&self) -> Vec<K>;
    fn len(&self) -> usize;
}

impl<K: Ord + Clone> Tree<K> for ordered_tree::boxed::Tree<K> {
    fn insert(&mut self, key: K) {
        ordered_tree::boxed::Tree::insert(self, key)
    }

    fn keys(&self) -> Vec<K> {
        self.in_order().cloned().collect()
    }

    fn len(&self) -> usize {
        ordered_tree::boxed::Tree::len(self)
    }
}

impl<K: Ord + Clone> Tree<K> for ordered_tree::arena::Tree<K> {
    fn insert(&mut self, key: K) {
        ordered_tree::arena::Tree::insert(self, key)
    }

    fn keys(&self) -> Vec<K> {
        self.in_order().cloned().collect()
    }

    fn len(&self) -> usize {
        ordered_tree::arena::Tree::len(self)
    }
}

/// Builds a tree of type `T` by inserting `xs` in order.
pub fn build<T: Tree<i8>>(xs: &[i8]) -> T {
    let mut tree = T::default();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

/// The distinct keys of `xs`, smallest first.
pub fn sorted_distinct(xs: &[i8]) -> Vec<i8> {
    let mut xs = xs.to_vec();
    xs.sort_unstable();
    xs.dedup();
    xs
}

/// Applies `ops` to a tree and a `BTreeSet`, failing on the first traversal that disagrees.
pub fn do_ops<T: Tree<i8>>(ops: &[Op<i8>]) -> bool {
    let mut tree = T::default();
    let mut set = std::collections::BTreeSet::new();
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(*k);
                set.insert(*k);
            }
            Op::Iter => {
                if tree.keys() != set.iter().copied().collect::<Vec<_>>() {
                    return false;
                }
            }
        }
    }
    tree.len() == set.len()
}

/// Shuffles `xs` by swapping each position with one picked from `seed`.
pub fn permute(xs: &[i8], seed: &[usize]) -> Vec<i8> {
    let mut permuted = xs.to_vec();
    for (i, s) in seed.iter().enumerate() {
        if permuted.is_empty() {
            break;
        }
        let a = i % permuted.len();
        let b = s % permuted.len();
        permuted.swap(a, b);
    }
    permuted
}
