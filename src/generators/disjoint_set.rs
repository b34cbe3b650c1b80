/// Union-find over the dense ids `0..n`. Tracks which cells already belong
/// to the same connected component while a spanning tree is built up.
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl DisjointSet {
    /// `n` singleton sets; every id starts out as its own root.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Root of the set containing `id`, with path compression: every node
    /// on the walk is repointed straight at the root.
    pub fn find(&mut self, id: usize) -> usize {
        if self.parent[id] != id {
            self.parent[id] = self.find(self.parent[id]);
        }
        self.parent[id]
    }

    /// Merges the sets containing `a` and `b`, the shallower tree going
    /// under the deeper one (union by rank). No-op if already merged.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }

        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }
    }
}
