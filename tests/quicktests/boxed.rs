use ordered_tree::boxed::Tree;

use crate::{build, do_ops, permute, sorted_distinct, Op};

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    do_ops::<Tree<i8>>(&ops)
}

#[quickcheck]
fn traversal_is_sorted_and_distinct(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = build(&xs);
    let keys: Vec<_> = tree.in_order().copied().collect();

    keys.windows(2).all(|w| w[0] < w[1]) && keys == sorted_distinct(&xs)
}

#[quickcheck]
fn reinserting_changes_nothing(xs: Vec<i8>, again: Vec<usize>) -> bool {
    let mut tree: Tree<i8> = build(&xs);
    let before: Vec<_> = tree.in_order().copied().collect();
    let height = tree.height();

    for i in again {
        if let Some(x) = xs.get(i % xs.len().max(1)) {
            tree.insert(*x);
        }
    }

    tree.in_order().copied().eq(before) && tree.height() == height
}

#[quickcheck]
fn insertion_order_does_not_matter(xs: Vec<i8>, seed: Vec<usize>) -> bool {
    let tree: Tree<i8> = build(&xs);
    let shuffled: Tree<i8> = build(&permute(&xs, &seed));

    tree.in_order().eq(shuffled.in_order())
}

#[quickcheck]
fn contains_exactly_what_was_inserted(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree: Tree<i8> = build(&xs);

    xs.iter().all(|x| tree.contains(x))
        && probes
            .iter()
            .filter(|p| !xs.contains(p))
            .all(|p| !tree.contains(p))
}

#[test]
fn scenarios() {
    let cases: [(&[i8], &[i8]); 5] = [
        (&[5, 3, 8, 1, 4], &[1, 3, 4, 5, 8]),
        (&[5, 5, 5], &[5]),
        (&[1, 2, 3, 4], &[1, 2, 3, 4]),
        (&[], &[]),
        (&[-2, 0, -2, 7], &[-2, 0, 7]),
    ];

    for (inserted, expected) in cases {
        let tree: Tree<i8> = build(inserted);
        assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), expected);
        assert_eq!(tree.len(), expected.len());
    }
}
