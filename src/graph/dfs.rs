//! Depth-first traversal.
//!
//! Unlike BFS, DFS marks a node when it is entered, not when it is pushed.
//! The iterative traversal may therefore hold several copies of a node on its
//! stack; every copy after the first is discarded when popped.
//!
//! All variants produce the same pre-order: a node, then the subtree of its
//! first unvisited neighbor, then the next, in enumeration order. The
//! iterative stack gets this by pushing neighbors in reverse.
//!
//! Time: O(V + E) over the traversed component(s). Space: O(V) for the
//! visited set, plus O(E) stack for the iterative variant or O(depth)
//! neighbor iterators for [`dfs_recursive`].

use rustc_hash::FxHashSet;

use crate::graph::access::VisitedSet;
use crate::graph::Graph;

/// A lazy depth-first traversal using an explicit stack.
///
/// Yields each reached node exactly once, in pre-order.
pub struct Dfs<'g, G>
where
    G: Graph + ?Sized + 'g,
{
    graph: &'g G,
    visited: VisitedSet<G::Node>,
    stack: Vec<G::Node>,
    /// Node yielded last, whose neighbors are not yet pushed.
    pending: Option<G::Node>,
    /// Remaining component roots, for whole-graph traversal.
    roots: Option<G::Nodes<'g>>,
    /// Reused buffer for reversing one neighbor list.
    scratch: Vec<G::Node>,
}

impl<'g, G> Dfs<'g, G>
where
    G: Graph + ?Sized + 'g,
{
    /// Traverses the nodes reachable from `start`, `start` first.
    pub fn new(graph: &'g G, start: G::Node) -> Self {
        Self {
            graph,
            visited: VisitedSet::new(),
            stack: vec![start],
            pending: None,
            roots: None,
            scratch: Vec::new(),
        }
    }

    /// Traverses every node of the graph.
    ///
    /// Each node not reached by an earlier component starts a fresh
    /// depth-first pass, in the order [`Graph::nodes`] yields them.
    pub fn complete(graph: &'g G) -> Self {
        Self {
            graph,
            visited: VisitedSet::new(),
            stack: Vec::new(),
            pending: None,
            roots: Some(graph.nodes()),
            scratch: Vec::new(),
        }
    }

    fn push_neighbors(&mut self, node: G::Node) {
        self.scratch.extend(self.graph.neighbors(node));
        while let Some(next) = self.scratch.pop() {
            if !self.visited.is_visited(next) {
                self.stack.push(next);
            }
        }
    }
}

impl<'g, G> Iterator for Dfs<'g, G>
where
    G: Graph + ?Sized + 'g,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.pending.take() {
            self.push_neighbors(node);
        }

        loop {
            while let Some(node) = self.stack.pop() {
                if self.visited.try_visit(node) {
                    self.pending = Some(node);
                    return Some(node);
                }
            }

            let visited = &self.visited;
            let root = self
                .roots
                .as_mut()?
                .find(|&root| !visited.is_visited(root))?;
            trace_event!("dfs: starting new component");
            self.stack.push(root);
        }
    }
}

/// Enters `start` and everything reachable from it that is not yet visited.
///
/// Mirrors native recursion: each stack frame is the partially consumed
/// neighbor iterator of one entered node, so neighbors are enumerated lazily
/// and the call stack stays flat however deep the graph is.
fn descend<G, F>(graph: &G, start: G::Node, visited: &mut VisitedSet<G::Node>, visit: &mut F)
where
    G: Graph + ?Sized,
    F: FnMut(G::Node),
{
    if !visited.try_visit(start) {
        return;
    }
    visit(start);

    let mut frames = vec![graph.neighbors(start)];
    while let Some(frame) = frames.last_mut() {
        let Some(next) = frame.next() else {
            frames.pop();
            continue;
        };
        if visited.try_visit(next) {
            visit(next);
            frames.push(graph.neighbors(next));
        }
    }
}

/// Calls `visit` on every node reachable from `start`, in recursive pre-order.
///
/// # Examples
///
/// ```rust
/// use canon_algos::graph::{dfs_recursive, AdjacencyList};
///
/// let graph = AdjacencyList::from_edges(5, [(0, 1), (0, 2), (1, 3), (1, 4)])?;
/// let mut order = Vec::new();
/// dfs_recursive(&graph, 0, |node| order.push(node));
/// assert_eq!(order, [0, 1, 3, 4, 2]);
/// # Ok::<(), canon_algos::Error>(())
/// ```
pub fn dfs_recursive<G, F>(graph: &G, start: G::Node, mut visit: F)
where
    G: Graph + ?Sized,
    F: FnMut(G::Node),
{
    debug_event!("dfs: single-source recursive traversal");
    let mut visited = VisitedSet::new();
    descend(graph, start, &mut visited, &mut visit);
}

/// Calls `visit` on every node reachable from `start`, using an explicit stack.
///
/// Produces the same order as [`dfs_recursive`].
pub fn dfs_iterative<G, F>(graph: &G, start: G::Node, visit: F)
where
    G: Graph + ?Sized,
    F: FnMut(G::Node),
{
    debug_event!("dfs: single-source iterative traversal");
    Dfs::new(graph, start).for_each(visit);
}

/// Calls `visit` on every node of the graph, component by component.
///
/// Components start in node-enumeration order and are each visited in
/// depth-first pre-order.
pub fn dfs_complete<G, F>(graph: &G, mut visit: F)
where
    G: Graph + ?Sized,
    F: FnMut(G::Node),
{
    debug_event!("dfs: whole-graph traversal");
    let mut visited = VisitedSet::new();
    for root in graph.nodes() {
        if !visited.is_visited(root) {
            trace_event!("dfs: starting new component");
            descend(graph, root, &mut visited, &mut visit);
        }
    }
}

/// Returns the nodes reachable from `start` in depth-first pre-order.
pub fn dfs_order<G>(graph: &G, start: G::Node) -> Vec<G::Node>
where
    G: Graph + ?Sized,
{
    Dfs::new(graph, start).collect()
}

/// Returns the set of nodes reachable from `start`, including `start`.
pub fn reachable<G>(graph: &G, start: G::Node) -> FxHashSet<G::Node>
where
    G: Graph + ?Sized,
{
    let mut visited = VisitedSet::new();
    descend(graph, start, &mut visited, &mut |_: G::Node| {});
    visited.into_inner()
}
