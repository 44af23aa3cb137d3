//! Adjacency-list graph representations.
//!
//! [`AdjacencyList`] stores out-edges per dense `usize` node in insertion
//! order; that order is the neighbor enumeration order seen by traversals.
//! `BTreeMap<N, Vec<N>>` is also a [`Graph`], enumerating nodes in key order.

use std::collections::{btree_map, BTreeMap};
use std::ops::Range;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// A directed graph over nodes `0..node_count`.
///
/// Parallel edges and self-loops are allowed. Serializes as the nested list of
/// out-neighbors, and deserialization rejects edges to nonexistent nodes.
///
/// # Examples
///
/// ```rust
/// use canon_algos::graph::{AdjacencyList, Graph};
///
/// let mut graph = AdjacencyList::new(3);
/// graph.add_edge(0, 2)?;
/// graph.add_edge(0, 1)?;
/// assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), [2, 1]);
/// assert!(graph.add_edge(0, 3).is_err());
/// # Ok::<(), canon_algos::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")]
pub struct AdjacencyList {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Creates a graph with `node_count` nodes and the given edges, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeOutOfBounds`] for the first edge with an endpoint
    /// `>= node_count`.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(node_count);
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Appends a node with no edges and returns its index.
    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Appends the directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeOutOfBounds`] if either endpoint is not a node.
    /// The graph is left unchanged in that case.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        let node_count = self.node_count();
        if let Some(node) = [from, to].into_iter().find(|&n| n >= node_count) {
            return Err(Error::NodeOutOfBounds { node, node_count });
        }
        self.adjacency[from].push(to);
        Ok(())
    }

    /// Returns the out-neighbors of `node`, or an empty slice if it is not a node.
    pub fn out_neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map_or(&[][..], Vec::as_slice)
    }
}

impl TryFrom<Vec<Vec<usize>>> for AdjacencyList {
    type Error = Error;

    fn try_from(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        let node_count = adjacency.len();
        if let Some(&node) = adjacency.iter().flatten().find(|&&n| n >= node_count) {
            return Err(Error::NodeOutOfBounds { node, node_count });
        }
        Ok(Self { adjacency })
    }
}

impl From<AdjacencyList> for Vec<Vec<usize>> {
    fn from(graph: AdjacencyList) -> Self {
        graph.adjacency
    }
}

impl Graph for AdjacencyList {
    type Node = usize;
    type Neighbors<'a> = core::iter::Copied<slice::Iter<'a, usize>>;
    type Nodes<'a> = Range<usize>;

    fn neighbors(&self, node: usize) -> Self::Neighbors<'_> {
        self.out_neighbors(node).iter().copied()
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        0..self.node_count()
    }
}

/// Nodes are the map keys in ascending order. A neighbor that is not itself a
/// key is still traversed; it simply has no out-edges.
impl<N> Graph for BTreeMap<N, Vec<N>>
where
    N: Copy + Ord + core::hash::Hash,
{
    type Node = N;
    type Neighbors<'a>
        = core::iter::Copied<slice::Iter<'a, N>>
    where
        Self: 'a;
    type Nodes<'a>
        = core::iter::Copied<btree_map::Keys<'a, N, Vec<N>>>
    where
        Self: 'a;

    fn neighbors(&self, node: N) -> Self::Neighbors<'_> {
        self.get(&node).map(|out| out.iter()).unwrap_or_default().copied()
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        self.keys().copied()
    }
}
