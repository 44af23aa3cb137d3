//! Internal traversal building blocks.
//!
//! This module is intentionally `pub(crate)` so the BFS and DFS drivers can
//! share visited-set logic without exposing it as part of the public API.

pub(crate) mod visited;

pub(crate) use visited::VisitedSet;
