//! Union-find gate for the exact maximum spanning forest policy.
//!
//! Union by rank with path halving. Equal ranks attach the larger root under
//! the smaller one so component roots are deterministic.

use super::ForestGate;

pub(super) struct DisjointSet {
    parents: Vec<usize>,
    ranks: Vec<u32>,
}

impl DisjointSet {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            parents: (0..vertex_count).collect(),
            ranks: vec![0; vertex_count],
        }
    }

    fn find(&mut self, vertex: usize) -> usize {
        let mut current = vertex;
        loop {
            let parent = self.parents[current];
            if parent == current {
                return current;
            }
            let grandparent = self.parents[parent];
            self.parents[current] = grandparent;
            current = grandparent;
        }
    }

    fn try_union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.ranks[left_root],
            self.ranks[right_root],
        );
        self.parents[child] = parent;
        if self.ranks[left_root] == self.ranks[right_root] {
            self.ranks[parent] = self.ranks[parent].saturating_add(1);
        }
        true
    }
}

impl ForestGate for DisjointSet {
    fn admit(&mut self, source: usize, target: usize) -> bool {
        self.try_union(source, target)
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u32,
    right_rank: u32,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }
    if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}
