//! # `canon_algos` - Canonical Algorithm Primitives
//!
//! A small toolkit of textbook algorithms written once, generically, and with
//! their ordering and visitation guarantees stated up front.
//!
//! ## Components
//!
//! - **Sorting** ([`sorting`]): stable bubble sort and stable top-down merge sort
//!   over slices, with natural-order, predicate and key-extraction forms.
//! - **Searching** ([`searching`]): linear search over any forward iterator,
//!   binary search, lower/upper bound and equal-range over sorted slices.
//! - **Graph traversal** ([`graph`]): breadth-first and depth-first traversal
//!   over any type implementing the [`Graph`] capability trait, either as lazy
//!   iterators or with a visitor callback, from one source or over the whole graph.
//! - **Linear recurrences** ([`dynamic_programming`]): the generalized Fibonacci
//!   recurrence over any cloneable type with `+`.
//!
//! No component depends on another at runtime, and no call retains state once
//! it returns.
//!
//! ## Guarantees
//!
//! ### Ordering
//! - Every ordering predicate is read as "strictly less than" and is assumed to be
//!   a strict weak order. It is never verified.
//! - Both sorts are stable: elements that compare equal keep their input order.
//! - Searches over sorted input assume the slice was sorted with the same predicate.
//!
//! ### Traversal
//! - Each node is reported exactly once per traversal.
//! - BFS marks nodes when they are enqueued and yields level order.
//! - DFS marks nodes when they are entered, and the iterative and recursive
//!   variants agree on pre-order with neighbors taken in enumeration order.
//! - Whole-graph variants start new components in node-enumeration order.
//!
//! ### Failure
//! - "Not found" is never an error: point searches return `None` and equal-range
//!   returns an empty range at the insertion point.
//! - The only runtime error is a negative index passed to the recurrence
//!   ([`Error::NegativeIndex`]) or an out-of-range edge endpoint when building an
//!   [`AdjacencyList`](graph::AdjacencyList).
//!
//! ## Example
//!
//! ```rust
//! use canon_algos::graph::{bfs_order, dfs_order, AdjacencyList};
//! use canon_algos::searching::equal_range;
//! use canon_algos::sorting::merge_sort;
//!
//! let mut values = vec![5, 2, 9, 1, 5, 6];
//! merge_sort(&mut values);
//! assert_eq!(values, [1, 2, 5, 5, 6, 9]);
//! assert_eq!(equal_range(&values, &5), 2..4);
//!
//! let graph = AdjacencyList::from_edges(5, [(0, 1), (0, 2), (1, 3), (1, 4)]).unwrap();
//! assert_eq!(bfs_order(&graph, 0), [0, 1, 2, 3, 4]);
//! assert_eq!(dfs_order(&graph, 0), [0, 1, 3, 4, 2]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod dynamic_programming;
pub mod error;
pub mod graph;
pub mod searching;
pub mod sorting;

#[cfg(feature = "proptest")]
pub mod testing;

pub use dynamic_programming::{fibonacci, fibonacci_with};
pub use error::{Error, Result};
pub use graph::{
    bfs_complete, bfs_iterative, dfs_complete, dfs_iterative, dfs_recursive, AdjacencyList, Bfs,
    Dfs, Graph,
};
pub use searching::{binary_search, equal_range, linear_search, linear_search_if};
pub use sorting::{bubble_sort, merge_sort};
