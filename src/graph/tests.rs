//! Tests for graph traversals.

use std::cell::Cell;
use std::collections::BTreeMap;

use super::*;

fn tree() -> AdjacencyList {
    // 0 -> 1, 2
    // 1 -> 3, 4
    AdjacencyList::from_edges(5, [(0, 1), (0, 2), (1, 3), (1, 4)]).unwrap()
}

fn two_components() -> AdjacencyList {
    // 0 -> 1, 2
    // 3 -> 4 -> 5
    AdjacencyList::from_edges(6, [(0, 1), (0, 2), (3, 4), (4, 5)]).unwrap()
}

fn collect_with<G: Graph>(
    graph: &G,
    start: G::Node,
    traversal: fn(&G, G::Node, &mut dyn FnMut(G::Node)),
) -> Vec<G::Node> {
    let mut order = Vec::new();
    traversal(graph, start, &mut |node| order.push(node));
    order
}

/// Delegating graph that counts neighbor enumerations.
struct Counting {
    inner: AdjacencyList,
    calls: Cell<usize>,
}

impl Graph for Counting {
    type Node = usize;
    type Neighbors<'a> = <AdjacencyList as Graph>::Neighbors<'a>;
    type Nodes<'a> = <AdjacencyList as Graph>::Nodes<'a>;

    fn neighbors(&self, node: usize) -> Self::Neighbors<'_> {
        self.calls.set(self.calls.get() + 1);
        self.inner.neighbors(node)
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        self.inner.nodes()
    }
}

#[test]
fn test_bfs_level_order() {
    let graph = tree();
    assert_eq!(bfs_order(&graph, 0), vec![0, 1, 2, 3, 4]);
    assert_eq!(
        collect_with(&graph, 0, |g, s, f| bfs_iterative(g, s, f)),
        vec![0, 1, 2, 3, 4]
    );
}

#[test]
fn test_dfs_pre_order_all_variants_agree() {
    let graph = tree();
    let expected = vec![0, 1, 3, 4, 2];
    assert_eq!(dfs_order(&graph, 0), expected);
    assert_eq!(collect_with(&graph, 0, |g, s, f| dfs_recursive(g, s, f)), expected);
    assert_eq!(collect_with(&graph, 0, |g, s, f| dfs_iterative(g, s, f)), expected);
}

#[test]
fn test_complete_traversals_follow_node_order() {
    let graph = two_components();

    let mut bfs = Vec::new();
    bfs_complete(&graph, |node| bfs.push(node));
    assert_eq!(bfs, vec![0, 1, 2, 3, 4, 5]);

    let mut dfs = Vec::new();
    dfs_complete(&graph, |node| dfs.push(node));
    assert_eq!(dfs, vec![0, 1, 2, 3, 4, 5]);

    assert_eq!(Bfs::complete(&graph).collect::<Vec<_>>(), bfs);
    assert_eq!(Dfs::complete(&graph).collect::<Vec<_>>(), dfs);
}

#[test]
fn test_complete_skips_nodes_reached_from_later_roots() {
    // 2 -> 0: node 0 is enumerated first and starts its own component,
    // so node 2's traversal must not revisit it.
    let graph = AdjacencyList::from_edges(3, [(2, 0), (2, 1)]).unwrap();
    assert_eq!(Bfs::complete(&graph).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(Dfs::complete(&graph).collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn test_single_source_ignores_unreachable_nodes() {
    let graph = two_components();
    assert_eq!(bfs_order(&graph, 3), vec![3, 4, 5]);
    assert_eq!(dfs_order(&graph, 1), vec![1]);
}

#[test]
fn test_empty_graph_and_isolated_start() {
    let empty = AdjacencyList::new(0);
    assert_eq!(Bfs::complete(&empty).count(), 0);
    assert_eq!(Dfs::complete(&empty).count(), 0);
    let mut visited = 0;
    dfs_complete(&empty, |_| visited += 1);
    bfs_complete(&empty, |_| visited += 1);
    assert_eq!(visited, 0);

    let isolated = AdjacencyList::new(3);
    assert_eq!(bfs_order(&isolated, 1), vec![1]);
    assert_eq!(dfs_order(&isolated, 1), vec![1]);
    assert_eq!(
        collect_with(&isolated, 1, |g, s, f| dfs_recursive(g, s, f)),
        vec![1]
    );
}

#[test]
fn test_diamond_visits_shared_successor_once() {
    // 0 -> 1 -> 3, 0 -> 2 -> 3
    let graph = AdjacencyList::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    assert_eq!(bfs_order(&graph, 0), vec![0, 1, 2, 3]);
    assert_eq!(dfs_order(&graph, 0), vec![0, 1, 3, 2]);
}

#[test]
fn test_dfs_iterative_discards_duplicate_pushes() {
    // Node 2 is pushed by 0 and again by 1 before its first pop.
    let graph = AdjacencyList::from_edges(3, [(0, 1), (0, 2), (1, 2)]).unwrap();
    assert_eq!(dfs_order(&graph, 0), vec![0, 1, 2]);
    assert_eq!(
        collect_with(&graph, 0, |g, s, f| dfs_recursive(g, s, f)),
        vec![0, 1, 2]
    );
}

#[test]
fn test_cycles_and_self_loops_terminate() {
    let graph =
        AdjacencyList::from_edges(4, [(0, 0), (0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
    assert_eq!(bfs_order(&graph, 1), vec![1, 2, 0, 3]);
    assert_eq!(dfs_order(&graph, 1), vec![1, 2, 0, 3]);
    assert_eq!(
        collect_with(&graph, 1, |g, s, f| dfs_recursive(g, s, f)),
        vec![1, 2, 0, 3]
    );
}

#[test]
fn test_dfs_recursive_handles_deep_chains() {
    let n = 200_000;
    let graph = AdjacencyList::from_edges(n, (0..n - 1).map(|i| (i, i + 1))).unwrap();
    let mut count = 0;
    let mut last = None;
    dfs_recursive(&graph, 0, |node| {
        count += 1;
        last = Some(node);
    });
    assert_eq!(count, n);
    assert_eq!(last, Some(n - 1));
}

#[test]
fn test_iterators_enumerate_neighbors_lazily() {
    let graph = Counting {
        inner: tree(),
        calls: Cell::new(0),
    };

    let mut bfs = Bfs::new(&graph, 0);
    assert_eq!(bfs.next(), Some(0));
    assert_eq!(graph.calls.get(), 0);
    assert_eq!(bfs.next(), Some(1));
    assert_eq!(graph.calls.get(), 1);

    graph.calls.set(0);
    let mut dfs = Dfs::new(&graph, 0);
    assert_eq!(dfs.next(), Some(0));
    assert_eq!(graph.calls.get(), 0);
}

#[test]
fn test_each_node_enumerated_once_per_traversal() {
    let graph = Counting {
        inner: two_components(),
        calls: Cell::new(0),
    };
    assert_eq!(Bfs::complete(&graph).count(), 6);
    assert_eq!(graph.calls.get(), 6);

    graph.calls.set(0);
    assert_eq!(Dfs::complete(&graph).count(), 6);
    assert_eq!(graph.calls.get(), 6);

    graph.calls.set(0);
    dfs_complete(&graph, |_| {});
    assert_eq!(graph.calls.get(), 6);
}

#[test]
fn test_non_integer_nodes() {
    let mut graph: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    graph.insert("root", vec!["left", "right"]);
    graph.insert("left", vec!["leaf"]);
    graph.insert("orphan", vec![]);

    assert_eq!(bfs_order(&graph, "root"), vec!["root", "left", "right", "leaf"]);
    assert_eq!(dfs_order(&graph, "root"), vec!["root", "left", "leaf", "right"]);

    // Keys enumerate as left, orphan, root.
    let mut all = Vec::new();
    dfs_complete(&graph, |node| all.push(node));
    assert_eq!(all, vec!["left", "leaf", "orphan", "root", "right"]);
}

#[test]
fn test_reachable_set() {
    let graph = two_components();
    let from_zero = reachable(&graph, 0);
    assert_eq!(from_zero.len(), 3);
    assert!(from_zero.contains(&2));
    assert!(!from_zero.contains(&3));
}
