const ROOT: usize = usize::MAX;

/// Disjoint-set forest over integer-labeled elements.
///
/// - `unite` merges by group size: the smaller group's root is attached
///   beneath the larger group's root.
/// - `find` compresses paths, so a sequence of operations runs in amortized
///   near-constant time per call.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    groups: usize,
}

impl UnionFind {
    /// Creates a forest of `n` singleton groups.
    pub fn new(n: usize) -> Self {
        Self {
            parent: vec![ROOT; n],
            size: vec![1; n],
            groups: n,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of groups currently in the partition.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// Root of the group containing `x`.
    ///
    /// Every node visited on the walk up is re-pointed directly at the root,
    /// so repeated lookups along the same path stay O(1).
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        assert!(x < self.parent.len(), "element out of range");
        let mut root = x;
        while self.parent[root] != ROOT {
            root = self.parent[root];
        }
        let mut cur = x;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Whether `x` and `y` are currently in the same group.
    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merges the groups containing `x` and `y`.
    ///
    /// Returns `false` without mutating anything when the two elements
    /// already share a group. When the group sizes are equal the first
    /// operand's root survives.
    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let mut x = self.find(x);
        let mut y = self.find(y);
        if x == y {
            return false;
        }
        if self.size[x] < self.size[y] {
            std::mem::swap(&mut x, &mut y);
        }
        self.parent[y] = x;
        self.size[x] += self.size[y];
        self.groups -= 1;
        true
    }

    /// Size of the group containing `x`.
    pub fn group_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}
