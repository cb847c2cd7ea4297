/// A disjoint-set partition over the elements `0..len`.
///
/// Implementations must keep `union` idempotent and commutative, and
/// `connected` must behave as an equivalence relation. Indices outside
/// `0..len` are a caller bug and may panic.
pub trait DisjointSet {
    /// Creates a partition of `n` singleton components.
    fn with_len(n: usize) -> Self
    where
        Self: Sized;

    /// Number of elements in the partition.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of components currently in the partition.
    fn count(&self) -> usize;

    /// Returns the canonical representative of the component containing `p`.
    fn find(&mut self, p: usize) -> usize;

    /// Merges the components containing `p` and `q`.
    fn union(&mut self, p: usize, q: usize);

    fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }
}

/// Weighted quick-union with path compression.
///
/// The smaller tree is always hung below the root of the larger one, which
/// keeps trees logarithmically shallow; `find` additionally points every
/// visited node at its grandparent.
#[derive(Debug, Clone, Default)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet for WeightedQuickUnion {
    fn with_len(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            let grandparent = self.parent[self.parent[p]];
            self.parent[p] = grandparent;
            p = grandparent;
        }
        p
    }

    fn union(&mut self, p: usize, q: usize) {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return;
        }

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
    }
}

/// Eager union-find: every element stores its component id directly.
///
/// `connected` is O(1) but `union` touches every element. Useful as a
/// reference implementation when checking structures built on top of
/// [`DisjointSet`].
#[derive(Debug, Clone, Default)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl DisjointSet for QuickFind {
    fn with_len(n: usize) -> Self {
        Self {
            id: (0..n).collect(),
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, p: usize) -> usize {
        self.id[p]
    }

    fn union(&mut self, p: usize, q: usize) {
        let p_id = self.id[p];
        let q_id = self.id[q];
        if p_id == q_id {
            return;
        }
        for id in self.id.iter_mut() {
            if *id == p_id {
                *id = q_id;
            }
        }
        self.count -= 1;
    }
}
