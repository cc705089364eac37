//! Disjoint-set connectivity over grid points.
//!
//! Tracks the connected suit regions of a board incrementally: every
//! placed cell becomes a singleton on first sight, and `join` merges
//! regions as same-suit neighbors appear. Components only ever grow;
//! nothing is ever deleted.
//!
//! Points are assigned dense integer ids on first insertion; parent
//! and size live in flat arrays. Path compression on find plus union
//! by size keeps operations near O(1) amortized.

use rustc_hash::FxHashMap;

use crate::core::Point;

/// Union-find over grid points.
///
/// All operations are total over every point ever inserted; `find` on
/// an unseen point creates a fresh singleton component.
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    ids: FxHashMap<Point, usize>,
    points: Vec<Point>,
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Create an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points ever inserted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no point has been inserted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Has this point been inserted?
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.ids.contains_key(&p)
    }

    /// The canonical representative of `p`'s component.
    ///
    /// Inserts `p` as a new singleton if unseen.
    pub fn find(&mut self, p: Point) -> Point {
        let id = self.id_of(p);
        let root = self.root(id);
        self.points[root]
    }

    /// Merge the components containing `a` and `b`.
    ///
    /// No-op when they are already joined. Unseen points are inserted
    /// first.
    pub fn join(&mut self, a: Point, b: Point) {
        let a = self.id_of(a);
        let b = self.id_of(b);

        let mut root_a = self.root(a);
        let mut root_b = self.root(b);
        if root_a == root_b {
            return;
        }

        // Smaller component attaches under the larger.
        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
    }

    /// The current partition as a collection of point sets.
    ///
    /// Read-only: walks parent chains without compressing, so a final
    /// board can be scored through a shared reference.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<Point>> {
        let mut by_root: FxHashMap<usize, Vec<Point>> = FxHashMap::default();

        for id in 0..self.points.len() {
            let mut root = id;
            while self.parent[root] != root {
                root = self.parent[root];
            }
            by_root.entry(root).or_default().push(self.points[id]);
        }

        by_root.into_values().collect()
    }

    fn id_of(&mut self, p: Point) -> usize {
        if let Some(&id) = self.ids.get(&p) {
            return id;
        }
        let id = self.points.len();
        self.ids.insert(p, id);
        self.points.push(p);
        self.parent.push(id);
        self.size.push(1);
        id
    }

    fn root(&mut self, start: usize) -> usize {
        let mut root = start;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point everything on the walked path at the root.
        let mut id = start;
        while self.parent[id] != root {
            let next = self.parent[id];
            self.parent[id] = root;
            id = next;
        }

        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_find_creates_singletons() {
        let mut ds = DisjointSet::new();
        assert!(ds.is_empty());

        assert_eq!(ds.find(p(0, 0)), p(0, 0));
        assert_eq!(ds.find(p(3, 1)), p(3, 1));
        assert_eq!(ds.len(), 2);
        assert!(ds.contains(p(0, 0)));
        assert!(!ds.contains(p(9, 9)));
    }

    #[test]
    fn test_join_transitivity() {
        let mut ds = DisjointSet::new();
        ds.join(p(0, 0), p(0, 1));
        ds.join(p(0, 1), p(0, 2));

        assert_eq!(ds.find(p(0, 0)), ds.find(p(0, 2)));
    }

    #[test]
    fn test_join_is_idempotent() {
        let mut ds = DisjointSet::new();
        ds.join(p(1, 1), p(1, 2));
        let root = ds.find(p(1, 1));

        ds.join(p(1, 1), p(1, 2));
        ds.join(p(1, 2), p(1, 1));

        assert_eq!(ds.find(p(1, 1)), root);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_separate_components_stay_separate() {
        let mut ds = DisjointSet::new();
        ds.join(p(0, 0), p(0, 1));
        ds.join(p(5, 5), p(5, 6));

        assert_ne!(ds.find(p(0, 0)), ds.find(p(5, 5)));
    }

    #[test]
    fn test_union_by_size_keeps_larger_root() {
        let mut ds = DisjointSet::new();

        // Component of three.
        ds.join(p(0, 0), p(0, 1));
        ds.join(p(0, 1), p(0, 2));
        let big = ds.find(p(0, 0));

        // Singleton attaches under it.
        ds.join(p(9, 9), p(0, 0));
        assert_eq!(ds.find(p(9, 9)), big);
    }

    #[test]
    fn test_groups_partition_all_points() {
        let mut ds = DisjointSet::new();
        ds.join(p(0, 0), p(0, 1));
        ds.join(p(0, 1), p(0, 2));
        ds.join(p(4, 4), p(4, 5));
        ds.find(p(8, 8));

        let mut groups = ds.groups();
        for g in &mut groups {
            g.sort();
        }
        groups.sort();

        assert_eq!(groups.len(), 3);

        let total: usize = groups.iter().map(Vec::len).sum();
        assert_eq!(total, ds.len());

        assert!(groups.contains(&vec![p(0, 0), p(0, 1), p(0, 2)]));
        assert!(groups.contains(&vec![p(4, 4), p(4, 5)]));
        assert!(groups.contains(&vec![p(8, 8)]));
    }

    #[test]
    fn test_long_chain_compresses() {
        let mut ds = DisjointSet::new();
        for y in 0..100 {
            ds.join(p(0, y), p(0, y + 1));
        }

        let root = ds.find(p(0, 0));
        for y in 0..=100 {
            assert_eq!(ds.find(p(0, y)), root);
        }
        assert_eq!(ds.groups().len(), 1);
    }
}
