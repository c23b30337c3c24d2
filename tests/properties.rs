use std::collections::BTreeSet;

use bstree::Tree;

fn sorted_distinct(xs: &[i8]) -> Vec<i8> {
    xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

quickcheck::quickcheck! {
    fn walks_in_ascending_order(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        tree.iter().copied().eq(sorted_distinct(&xs))
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();

        nots.iter().filter(|x| !added.contains(*x)).all(|x| !tree.contains(x))
    }

    fn duplicate_inserts_change_nothing(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before = tree.clone();

        let fresh = xs.iter().any(|x| tree.insert(*x));
        !fresh && tree == before && tree.len() == before.len()
    }

    fn removing_missing_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
        let before = tree.clone();

        !tree.remove(&missing) && tree == before
    }

    fn removing_omits_exactly_that_value(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();

        for x in &xs {
            let mut expected: Vec<_> = tree.iter().copied().collect();
            expected.retain(|v| v != x);

            tree.remove(x);
            if tree.contains(x) || !tree.iter().copied().eq(expected) {
                return false;
            }
        }
        true
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }

    fn removing_everything_empties(xs: Vec<i16>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for x in &xs {
            tree.remove(x);
        }

        tree.is_empty() && tree.iter().next().is_none() && xs.iter().all(|x| !tree.contains(x))
    }
}
