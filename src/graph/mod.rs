//! Graph traversals over a caller-supplied graph abstraction.
//!
//! The crate stores no graph of its own: anything implementing [`Graph`] can be
//! traversed. Two representations are provided for convenience:
//! - [`AdjacencyList`]: dense `usize` nodes, validated edges, serde support
//! - `BTreeMap<N, Vec<N>>`: arbitrary ordered node identities
//!
//! Traversals come in two shapes:
//! - lazy iterators, [`Bfs`] and [`Dfs`], yielding node identities on demand
//! - callback drivers, [`bfs_iterative`], [`bfs_complete`], [`dfs_recursive`],
//!   [`dfs_iterative`] and [`dfs_complete`], invoking a visitor once per node
//!
//! Every call owns its visited set; nothing is shared between calls.

use core::hash::Hash;

pub(crate) mod access;
pub mod adj_list;
pub mod bfs;
pub mod dfs;

pub use adj_list::AdjacencyList;
pub use bfs::{bfs_complete, bfs_iterative, bfs_order, Bfs};
pub use dfs::{dfs_complete, dfs_iterative, dfs_order, dfs_recursive, reachable, Dfs};

/// Capability contract for traversable graphs.
///
/// Implementations must be pure: `neighbors` must return the same sequence
/// every time it is called with the same node during a traversal, and
/// `nodes` must be finite. Traversal order is defined in terms of the order
/// these iterators produce.
///
/// # Examples
///
/// ```rust
/// use canon_algos::graph::{bfs_order, Graph};
///
/// /// A ring of `n` nodes where each node points at its successor.
/// struct Ring(u32);
///
/// impl Graph for Ring {
///     type Node = u32;
///     type Neighbors<'a> = std::iter::Once<u32>;
///     type Nodes<'a> = std::ops::Range<u32>;
///
///     fn neighbors(&self, node: u32) -> Self::Neighbors<'_> {
///         std::iter::once((node + 1) % self.0)
///     }
///
///     fn nodes(&self) -> Self::Nodes<'_> {
///         0..self.0
///     }
/// }
///
/// assert_eq!(bfs_order(&Ring(4), 2), [2, 3, 0, 1]);
/// ```
pub trait Graph {
    /// Node identity. Copied freely and used as a hash-set key.
    type Node: Copy + Eq + Hash;

    /// Iterator over the outgoing neighbors of one node.
    type Neighbors<'a>: Iterator<Item = Self::Node>
    where
        Self: 'a;

    /// Iterator over every node of the graph.
    type Nodes<'a>: Iterator<Item = Self::Node>
    where
        Self: 'a;

    /// Returns the outgoing neighbors of `node`, in a fixed order.
    fn neighbors(&self, node: Self::Node) -> Self::Neighbors<'_>;

    /// Returns every node of the graph, in a fixed order.
    fn nodes(&self) -> Self::Nodes<'_>;
}

#[cfg(test)]
mod tests;
