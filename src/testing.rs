//! `proptest` strategies for exercising code built on this crate.
//!
//! Enabled with the `proptest` feature.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::graph::AdjacencyList;

/// Generates directed graphs with up to `max_nodes` nodes and up to
/// `max_out_degree` out-edges per node. Self-loops, parallel edges and cycles
/// all occur.
pub fn adjacency_list(
    max_nodes: usize,
    max_out_degree: usize,
) -> impl Strategy<Value = AdjacencyList> {
    (0..=max_nodes)
        .prop_flat_map(move |n| vec(vec(0..n.max(1), 0..=max_out_degree), n))
        .prop_filter_map("edge endpoints within node range", |adjacency| {
            AdjacencyList::try_from(adjacency).ok()
        })
}

/// Generates a graph with at least one node, paired with a valid start node.
pub fn graph_with_start(
    max_nodes: usize,
    max_out_degree: usize,
) -> impl Strategy<Value = (AdjacencyList, usize)> {
    adjacency_list(max_nodes.max(1), max_out_degree)
        .prop_filter("graph has a node", |graph| !graph.is_empty())
        .prop_flat_map(|graph| {
            let n = graph.node_count();
            (Just(graph), 0..n)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{bfs_order, Graph};

    proptest! {
        #[test]
        fn test_generated_graphs_are_valid(graph in adjacency_list(12, 4)) {
            let n = graph.node_count();
            prop_assert!(n <= 12);
            for node in graph.nodes() {
                prop_assert!(graph.neighbors(node).all(|next| next < n));
            }
        }

        #[test]
        fn test_start_node_in_range((graph, start) in graph_with_start(8, 3)) {
            prop_assert!(start < graph.node_count());
            prop_assert_eq!(bfs_order(&graph, start)[0], start);
        }
    }
}
