//! Breadth-first traversal.
//!
//! Nodes are marked visited when they are enqueued, not when they are
//! dequeued, so two predecessors at the same level cannot both enqueue the
//! same successor. The result is level order, with neighbors taken in the
//! order the graph enumerates them.
//!
//! Time: O(V + E) over the traversed component(s). Space: O(V) for the
//! visited set and the frontier.

use std::collections::VecDeque;

use crate::graph::access::VisitedSet;
use crate::graph::Graph;

/// A lazy breadth-first traversal.
///
/// Yields each reached node exactly once. A node's neighbors are enumerated
/// only when the iterator is advanced past it.
pub struct Bfs<'g, G>
where
    G: Graph + ?Sized + 'g,
{
    graph: &'g G,
    visited: VisitedSet<G::Node>,
    queue: VecDeque<G::Node>,
    /// Node yielded last, whose neighbors are not yet enqueued.
    pending: Option<G::Node>,
    /// Remaining component roots, for whole-graph traversal.
    roots: Option<G::Nodes<'g>>,
}

impl<'g, G> Bfs<'g, G>
where
    G: Graph + ?Sized + 'g,
{
    /// Traverses the nodes reachable from `start`, `start` first.
    pub fn new(graph: &'g G, start: G::Node) -> Self {
        let mut visited = VisitedSet::new();
        let mut queue = VecDeque::new();
        visited.try_visit(start);
        queue.push_back(start);

        Self {
            graph,
            visited,
            queue,
            pending: None,
            roots: None,
        }
    }

    /// Traverses every node of the graph.
    ///
    /// Each node not reached by an earlier component starts a fresh
    /// breadth-first pass, in the order [`Graph::nodes`] yields them.
    pub fn complete(graph: &'g G) -> Self {
        Self {
            graph,
            visited: VisitedSet::new(),
            queue: VecDeque::new(),
            pending: None,
            roots: Some(graph.nodes()),
        }
    }

    fn enqueue_neighbors(&mut self, node: G::Node) {
        for next in self.graph.neighbors(node) {
            if self.visited.try_visit(next) {
                self.queue.push_back(next);
            }
        }
    }
}

impl<'g, G> Iterator for Bfs<'g, G>
where
    G: Graph + ?Sized + 'g,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.pending.take() {
            self.enqueue_neighbors(node);
        }

        if self.queue.is_empty() {
            let visited = &mut self.visited;
            let root = self.roots.as_mut()?.find(|&root| visited.try_visit(root))?;
            trace_event!("bfs: starting new component");
            self.queue.push_back(root);
        }

        let node = self.queue.pop_front()?;
        self.pending = Some(node);
        Some(node)
    }
}

/// Calls `visit` on every node reachable from `start`, in breadth-first order.
///
/// # Examples
///
/// ```rust
/// use canon_algos::graph::{bfs_iterative, AdjacencyList};
///
/// let graph = AdjacencyList::from_edges(5, [(0, 1), (0, 2), (1, 3), (1, 4)])?;
/// let mut order = Vec::new();
/// bfs_iterative(&graph, 0, |node| order.push(node));
/// assert_eq!(order, [0, 1, 2, 3, 4]);
/// # Ok::<(), canon_algos::Error>(())
/// ```
pub fn bfs_iterative<G, F>(graph: &G, start: G::Node, visit: F)
where
    G: Graph + ?Sized,
    F: FnMut(G::Node),
{
    debug_event!("bfs: single-source traversal");
    Bfs::new(graph, start).for_each(visit);
}

/// Calls `visit` on every node of the graph, component by component.
///
/// Components start in node-enumeration order and are each visited in
/// breadth-first order.
pub fn bfs_complete<G, F>(graph: &G, visit: F)
where
    G: Graph + ?Sized,
    F: FnMut(G::Node),
{
    debug_event!("bfs: whole-graph traversal");
    Bfs::complete(graph).for_each(visit);
}

/// Returns the nodes reachable from `start` in breadth-first order.
pub fn bfs_order<G>(graph: &G, start: G::Node) -> Vec<G::Node>
where
    G: Graph + ?Sized,
{
    Bfs::new(graph, start).collect()
}
