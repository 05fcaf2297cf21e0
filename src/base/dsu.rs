//! Disjoint set union over the index universe `0..n`.
//!
//! Merges use union by rank, lookups use full path compression. Every public
//! operation validates its indices before it touches any node, so a call that
//! fails with [`DSUErr::IndexOutOfRange`] leaves the store exactly as it was.

use smallvec::SmallVec;
use thiserror::Error;

/// Inline capacity of one member list returned by [`DSU::groups`].
pub const DSU_GROUP_INLINE: usize = 4;

pub type DSUGroup = SmallVec<[usize; DSU_GROUP_INLINE]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DSUErr {
    #[error("DSU index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type DSURes<T = ()> = Result<T, DSUErr>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DSUNode {
    parent: usize,
    /// Upper bound of the subtree height. Only meaningful on roots.
    rank: u8,
    /// Component cardinality. Stale unless this node is a root.
    size: usize,
}

impl DSUNode {
    fn singleton(index: usize) -> Self {
        Self { parent: index, rank: 0, size: 1 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DSU {
    nodes: Vec<DSUNode>,
    components: usize,
}

impl DSU {
    /// Creates a store with `n` singleton components.
    pub fn new(n: usize) -> Self {
        let mut dsu = Self::default();
        dsu.reset(n);
        dsu
    }

    /// Discards the current partition and starts over with `n` singletons.
    pub fn reset(&mut self, n: usize) {
        self.nodes.clear();
        self.nodes.extend((0..n).map(DSUNode::singleton));
        self.components = n;
        log::debug!("DSU reset to {n} singleton components");
    }

    /// Size of the index universe.
    pub fn count(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn components_count(&self) -> usize {
        self.components
    }

    fn check_index(&self, index: usize) -> DSURes<usize> {
        if index < self.nodes.len() {
            Ok(index)
        } else {
            Err(DSUErr::IndexOutOfRange { index, len: self.nodes.len() })
        }
    }

    fn root_of(&self, mut x: usize) -> usize {
        while self.nodes[x].parent != x {
            x = self.nodes[x].parent;
        }
        x
    }

    /// Two-pass lookup: walk up to the root, then point every node on the
    /// path straight at it. `on_update(node, old_parent, root)` fires for
    /// every rewritten link.
    fn compress_from<T>(&mut self, x: usize, mut on_update: T) -> usize
    where
        T: FnMut(/* node */ usize, /* old parent */ usize, /* root */ usize),
    {
        let root = self.root_of(x);
        let tracing = log::log_enabled!(log::Level::Trace);
        let mut curr = x;
        let mut rewritten = 0usize;
        while curr != root {
            let parent = self.nodes[curr].parent;
            if parent != root {
                self.nodes[curr].parent = root;
                on_update(curr, parent, root);
                if tracing {
                    rewritten += 1;
                }
            }
            curr = parent;
        }
        if tracing && rewritten > 0 {
            log::trace!("DSU find({x}): compressed {rewritten} links onto root {root}");
        }
        root
    }

    /// Returns the root of `x`'s component, compressing the traversed path.
    pub fn find(&mut self, x: usize) -> DSURes<usize> {
        let x = self.check_index(x)?;
        Ok(self.compress_from(x, |_, _, _| {}))
    }

    /// Same as [`DSU::find`], reporting each compressed link as
    /// `(node, old parent, root)`.
    pub fn find_when<T>(&mut self, x: usize, on_update: T) -> DSURes<usize>
    where
        T: FnMut(usize, usize, usize),
    {
        let x = self.check_index(x)?;
        Ok(self.compress_from(x, on_update))
    }

    /// Root lookup without path compression.
    pub fn readonly_find(&self, x: usize) -> DSURes<usize> {
        let x = self.check_index(x)?;
        Ok(self.root_of(x))
    }

    pub fn direct_parent(&self, x: usize) -> DSURes<usize> {
        let x = self.check_index(x)?;
        Ok(self.nodes[x].parent)
    }

    pub fn is_root(&self, x: usize) -> DSURes<bool> {
        let x = self.check_index(x)?;
        Ok(self.nodes[x].parent == x)
    }

    pub fn same(&mut self, a: usize, b: usize) -> DSURes<bool> {
        let a = self.check_index(a)?;
        let b = self.check_index(b)?;
        Ok(self.find(a)? == self.find(b)?)
    }
    pub fn readonly_same(&self, a: usize, b: usize) -> DSURes<bool> {
        Ok(self.readonly_find(a)? == self.readonly_find(b)?)
    }

    /// Merges the components of `a` and `b`. Returns `false` if they were
    /// already one component.
    ///
    /// On equal ranks the root of `a` wins and its rank grows by one.
    pub fn unite(&mut self, a: usize, b: usize) -> DSURes<bool> {
        let a = self.check_index(a)?;
        let b = self.check_index(b)?;
        let mut ra = self.find(a)?;
        let mut rb = self.find(b)?;
        if ra == rb {
            return Ok(false);
        }
        if self.nodes[ra].rank < self.nodes[rb].rank {
            std::mem::swap(&mut ra, &mut rb);
        }

        let absorbed = self.nodes[rb];
        self.nodes[rb].parent = ra;
        let winner = &mut self.nodes[ra];
        winner.size += absorbed.size;
        if winner.rank == absorbed.rank {
            winner.rank += 1;
        }
        self.components -= 1;

        log::debug!(
            "DSU unite({a}, {b}): root {rb} joins {ra}, size {}, {} components left",
            self.nodes[ra].size,
            self.components
        );
        Ok(true)
    }

    pub fn component_size(&mut self, x: usize) -> DSURes<usize> {
        let root = self.find(x)?;
        Ok(self.nodes[root].size)
    }

    /// All current roots in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, node)| (node.parent == i).then_some(i))
    }

    /// The whole partition. Members of one group are ascending, groups are
    /// ordered by their smallest member.
    pub fn groups(&mut self) -> Vec<DSUGroup> {
        // root -> position in `groups`
        let mut slot = vec![usize::MAX; self.nodes.len()];
        let mut groups: Vec<DSUGroup> = Vec::with_capacity(self.components);
        for x in 0..self.nodes.len() {
            let root = self.compress_from(x, |_, _, _| {});
            if slot[root] == usize::MAX {
                slot[root] = groups.len();
                groups.push(DSUGroup::new());
            }
            groups[slot[root]].push(x);
        }
        groups
    }
}
