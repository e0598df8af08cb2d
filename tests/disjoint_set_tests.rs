use graph_solvers::DisjointSet;
use rand::prelude::*;

#[test]
fn test_singletons_at_construction() {
    let mut forest = DisjointSet::new(4);
    for x in 0..4 {
        assert_eq!(forest.find(x), x);
        for y in 0..4 {
            assert_eq!(forest.is_same(x, y), x == y);
        }
    }
}

#[test]
fn test_unite_script() {
    // The 5-node scenario: two pairs merge, then a bridge joins them
    let mut forest = DisjointSet::new(5);
    forest.unite(0, 1);
    forest.unite(2, 3);

    assert!(forest.is_same(0, 1));
    assert!(!forest.is_same(0, 2));
    assert!(!forest.is_same(1, 3));
    assert!(!forest.is_same(0, 4));

    forest.unite(1, 2);
    assert!(forest.is_same(0, 3));
    assert!(!forest.is_same(0, 4));
}

#[test]
fn test_unite_same_class_is_noop() {
    let mut forest = DisjointSet::new(3);
    forest.unite(0, 1);
    let rep = forest.find(0);
    forest.unite(1, 0);
    forest.unite(0, 0);
    assert_eq!(forest.find(0), rep);
    assert_eq!(forest.find(1), rep);
}

#[test]
fn test_representative_is_self_parented() {
    let mut forest = DisjointSet::new(8);
    forest.unite(0, 1);
    forest.unite(1, 2);
    forest.unite(5, 6);
    for x in 0..8 {
        let rep = forest.find(x);
        assert_eq!(forest.find(rep), rep, "representative of {} is not a root", x);
    }
}

// Naive connectivity oracle: merge classes by relabeling a label array
struct LabelOracle {
    labels: Vec<usize>,
}

impl LabelOracle {
    fn new(n: usize) -> Self {
        LabelOracle {
            labels: (0..n).collect(),
        }
    }

    fn unite(&mut self, x: usize, y: usize) {
        let (keep, gone) = (self.labels[x], self.labels[y]);
        if keep != gone {
            for label in self.labels.iter_mut() {
                if *label == gone {
                    *label = keep;
                }
            }
        }
    }

    fn is_same(&self, x: usize, y: usize) -> bool {
        self.labels[x] == self.labels[y]
    }
}

#[test]
fn test_matches_naive_oracle_on_random_merges() {
    let n = 40;
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let mut forest = DisjointSet::new(n);
        let mut oracle = LabelOracle::new(n);

        for _ in 0..30 {
            let x = rng.gen_range(0..n);
            let y = rng.gen_range(0..n);
            forest.unite(x, y);
            oracle.unite(x, y);
        }

        for x in 0..n {
            for y in 0..n {
                assert_eq!(
                    forest.is_same(x, y),
                    oracle.is_same(x, y),
                    "connectivity of ({}, {}) disagrees with oracle",
                    x,
                    y
                );
            }
        }
    }
}
