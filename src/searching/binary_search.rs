//! Binary searches over sorted slices.
//!
//! All functions narrow a half-open window `[low, high)` by midpoint
//! comparison and run in O(log n) time with O(1) space. The predicate is the
//! same "strictly less" relation the slice was sorted with.

use core::ops::Range;

/// Returns the index of some element equal to `value`, or `None`.
///
/// When several elements are equal, any one of them may be returned; use
/// [`equal_range`] to get all of them.
///
/// # Examples
///
/// ```rust
/// use canon_algos::searching::binary_search;
///
/// let v = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&v, &5), Some(2));
/// assert_eq!(binary_search(&v, &10), None);
/// ```
pub fn binary_search<T: Ord>(slice: &[T], value: &T) -> Option<usize> {
    binary_search_by(slice, value, |a, b| a < b)
}

/// [`binary_search`] under a caller-supplied ordering.
pub fn binary_search_by<T, F>(slice: &[T], value: &T, mut less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut low = 0;
    let mut high = slice.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if less(&slice[mid], value) {
            low = mid + 1;
        } else if less(value, &slice[mid]) {
            high = mid;
        } else {
            return Some(mid);
        }
    }

    None
}

/// Returns the first index whose element does not precede `value`.
///
/// This is the insertion point that keeps `value` ahead of equal elements.
pub fn lower_bound<T: Ord>(slice: &[T], value: &T) -> usize {
    lower_bound_by(slice, value, |a, b| a < b)
}

/// [`lower_bound`] under a caller-supplied ordering.
pub fn lower_bound_by<T, F>(slice: &[T], value: &T, mut less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut low = 0;
    let mut high = slice.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if less(&slice[mid], value) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    low
}

/// Returns the first index whose element `value` strictly precedes.
///
/// This is the insertion point that keeps `value` behind equal elements.
pub fn upper_bound<T: Ord>(slice: &[T], value: &T) -> usize {
    upper_bound_by(slice, value, |a, b| a < b)
}

/// [`upper_bound`] under a caller-supplied ordering.
pub fn upper_bound_by<T, F>(slice: &[T], value: &T, mut less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut low = 0;
    let mut high = slice.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if less(value, &slice[mid]) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    low
}

/// Returns the range of indices holding elements equal to `value`.
///
/// The range is `lower_bound..upper_bound`. When `value` is absent it is
/// empty and both ends sit at the insertion point.
///
/// # Examples
///
/// ```rust
/// use canon_algos::searching::equal_range;
///
/// let v = [1, 3, 5, 5, 5, 7, 9];
/// assert_eq!(equal_range(&v, &5), 2..5);
/// assert_eq!(equal_range(&v, &6), 5..5);
/// ```
pub fn equal_range<T: Ord>(slice: &[T], value: &T) -> Range<usize> {
    equal_range_by(slice, value, |a, b| a < b)
}

/// [`equal_range`] under a caller-supplied ordering.
pub fn equal_range_by<T, F>(slice: &[T], value: &T, mut less: F) -> Range<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let start = lower_bound_by(slice, value, &mut less);
    let end = upper_bound_by(slice, value, &mut less);
    start..end
}
