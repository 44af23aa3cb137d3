//! In-place comparison sorts.
//!
//! Both sorts come in three forms:
//! - natural order (`T: Ord`)
//! - `_by`: a caller-supplied "strictly less" predicate
//! - `_by_key`: a key extractor whose results are compared with `Ord`
//!
//! Reversing the predicate yields non-increasing order. Both algorithms are
//! stable: an element is moved past another only when the predicate strictly
//! orders them.

pub mod bubble_sort;
pub mod merge_sort;

pub use bubble_sort::{bubble_sort, bubble_sort_by, bubble_sort_by_key};
pub use merge_sort::{merge_sort, merge_sort_by, merge_sort_by_key};

/// Returns `true` if no adjacent pair of `slice` is strictly out of order under `less`.
///
/// An empty or single-element slice is sorted.
pub fn is_sorted_by<T, F>(slice: &[T], mut less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    slice.windows(2).all(|pair| !less(&pair[1], &pair[0]))
}
