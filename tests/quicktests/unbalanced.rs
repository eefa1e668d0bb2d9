use std::collections::BTreeSet;

use bstree::unbalanced::{Node, Tree};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values in both.
fn do_ops(ops: &[Op<i16>], tree: &mut Tree<i16>, set: &mut BTreeSet<i16>) {
    for op in ops {
        match op {
            Op::Insert(v) => {
                assert_eq!(tree.insert(*v), set.insert(*v));
            }
            Op::Remove(v) => {
                assert_eq!(tree.remove(v), set.take(v));
            }
        }
    }
}

fn in_order_values(tree: &Tree<i16>) -> Vec<i16> {
    tree.dfs_in_order().into_iter().copied().collect()
}

fn height(node: Option<&Node<i16>>) -> usize {
    match node {
        None => 0,
        Some(node) => height(node.left()).max(height(node.right())) + 1,
    }
}

/// Balance check that re-measures every subtree, used as an oracle for the
/// single-pass `is_balanced`.
fn balanced_by_remeasuring(node: Option<&Node<i16>>) -> bool {
    match node {
        None => true,
        Some(node) => {
            height(node.left()).abs_diff(height(node.right())) <= 1
                && balanced_by_remeasuring(node.left())
                && balanced_by_remeasuring(node.right())
        }
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted_after_any_ops(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        do_ops(&ops, &mut tree, &mut set);

        let expected: Vec<i16> = set.iter().copied().collect();
        in_order_values(&tree) == expected && tree.len() == set.len()
    }
}

quickcheck::quickcheck! {
    fn insert_variants_build_identical_trees(xs: Vec<i16>) -> bool {
        let mut iterative = Tree::new();
        let mut recursive = Tree::new();
        for x in &xs {
            assert_eq!(iterative.insert(*x), recursive.insert_recursively(*x));
        }

        iterative.dfs_pre_order() == recursive.dfs_pre_order()
            && iterative.bfs() == recursive.bfs()
            && iterative.len() == recursive.len()
    }
}

quickcheck::quickcheck! {
    fn find_variants_agree(xs: Vec<i16>, probes: Vec<i16>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        for x in &xs {
            tree.insert(*x);
            set.insert(*x);
        }

        xs.iter().chain(probes.iter()).all(|probe| {
            let found = tree.find(probe).map(Node::value);
            let found_recursively = tree.find_recursively(probe).map(Node::value);
            found == found_recursively && found.is_some() == set.contains(probe)
        })
    }
}

quickcheck::quickcheck! {
    fn traversals_visit_every_value_once(xs: Vec<i16>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        for x in &xs {
            tree.insert(*x);
            set.insert(*x);
        }
        let expected: Vec<i16> = set.iter().copied().collect();

        let mut orders = vec![
            tree.dfs_pre_order(),
            tree.dfs_post_order(),
            tree.bfs(),
        ];
        orders.iter_mut().for_each(|order| order.sort_unstable());

        in_order_values(&tree) == expected
            && orders
                .into_iter()
                .all(|order| order.into_iter().copied().collect::<Vec<_>>() == expected)
    }
}

quickcheck::quickcheck! {
    fn removal_matches_set_semantics(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        for x in &xs {
            tree.insert(*x);
            set.insert(*x);
        }
        for delete in &deletes {
            assert_eq!(tree.remove(delete), set.take(delete));
        }

        let expected: Vec<i16> = set.iter().copied().collect();
        in_order_values(&tree) == expected
            && deletes.iter().all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn second_highest_matches_model(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        do_ops(&ops, &mut tree, &mut set);

        tree.find_second_highest().copied() == set.iter().rev().nth(1).copied()
    }
}

quickcheck::quickcheck! {
    fn min_matches_model(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        do_ops(&ops, &mut tree, &mut set);

        tree.min() == set.iter().next()
    }
}

quickcheck::quickcheck! {
    fn is_balanced_matches_remeasuring_oracle(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        do_ops(&ops, &mut tree, &mut set);

        tree.is_balanced() == balanced_by_remeasuring(tree.root())
    }
}
