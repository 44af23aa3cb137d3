//! Sequence searches.
//!
//! - [`linear_search`] / [`linear_search_if`] scan any forward iterator and need
//!   no ordering.
//! - [`binary_search`], [`lower_bound`], [`upper_bound`] and [`equal_range`]
//!   require a slice sorted under the same predicate used for the search.
//!   Unsorted input is not detected; the result is then unspecified.
//!
//! A value that is not present is reported as `None`, or as an empty range at
//! the insertion point, never as an error.

pub mod binary_search;
pub mod linear_search;

pub use binary_search::{
    binary_search, binary_search_by, equal_range, equal_range_by, lower_bound, lower_bound_by,
    upper_bound, upper_bound_by,
};
pub use linear_search::{linear_search, linear_search_if};
