//! Per-traversal visited sets.
//!
//! Every traversal call owns one `VisitedSet`, created when the traversal
//! starts and dropped when it ends. Node identities are hashed with
//! `rustc_hash`, so any `Copy + Eq + Hash` node type works, not just dense indices.

use core::hash::Hash;

use rustc_hash::FxHashSet;

/// Set of node identities already marked during one traversal.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet<N> {
    seen: FxHashSet<N>,
}

impl<N: Copy + Eq + Hash> VisitedSet<N> {
    pub(crate) fn new() -> Self {
        Self {
            seen: FxHashSet::default(),
        }
    }

    /// Returns `true` iff `node` was not yet visited, marking it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: N) -> bool {
        self.seen.insert(node)
    }

    #[inline]
    pub(crate) fn is_visited(&self, node: N) -> bool {
        self.seen.contains(&node)
    }

    pub(crate) fn into_inner(self) -> FxHashSet<N> {
        self.seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_visit_marks_once() {
        let mut visited = VisitedSet::new();
        assert!(!visited.is_visited('a'));
        assert!(visited.try_visit('a'));
        assert!(!visited.try_visit('a'));
        assert!(visited.is_visited('a'));
        assert_eq!(visited.into_inner().len(), 1);
    }
}
