use std::collections::HashSet;

use arena_collections::bst::Tree;
use arena_collections::Mode;

use crate::Op;

/// Applies a set of operations to a tree and a multiset model (a plain
/// `Vec`). This way we can ensure that after a random smattering of inserts
/// and deletes the tree holds exactly the model's keys.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, model: &mut Vec<K>)
where
    K: Ord + Copy,
{
    for (step, op) in ops.iter().enumerate() {
        let mode = if step % 2 == 0 {
            Mode::Iterative
        } else {
            Mode::Recursive
        };
        match op {
            Op::Insert(k) => {
                bst.insert(*k, mode);
                model.push(*k);
            }
            Op::Remove(k) => {
                if let Some(id) = bst.search(k, mode) {
                    bst.delete(id).expect("searched handle is live");
                    let pos = model
                        .iter()
                        .position(|m| m == k)
                        .expect("model tracks tree contents");
                    model.swap_remove(pos);
                }
            }
        }
    }
}

fn inorder<K: Ord + Copy>(tree: &Tree<K>) -> Vec<K> {
    let mut keys = Vec::new();
    tree.inorder_walk(tree.root(), |k| keys.push(*k))
        .expect("tree root is live");
    keys
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);

        model.sort_unstable();
        inorder(&tree) == model
            && model.iter().all(|k| tree.search(k, Mode::Iterative).is_some())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x, Mode::Iterative);
        }

        xs.iter().all(|x| {
            let hit = tree.search(x, Mode::Iterative);
            hit.is_some() && hit == tree.search(x, Mode::Recursive)
        })
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x, Mode::Iterative);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| {
            tree.search(x, Mode::Iterative).is_none()
                && tree.search(x, Mode::Recursive).is_none()
        })
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x, Mode::Iterative);
        }
        for delete in &deletes {
            // We may have inserted the same key multiple times - delete each one.
            while let Some(id) = tree.search(delete, Mode::Iterative) {
                tree.delete(id).expect("searched handle is live");
            }
        }

        let mut still_present = xs;
        for delete in &deletes {
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| tree.search(x, Mode::Iterative).is_none())
            && still_present.iter().all(|x| tree.search(x, Mode::Iterative).is_some())
    }
}
