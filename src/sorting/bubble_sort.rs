//! Bubble sort with early exit.
//!
//! Each pass walks adjacent pairs over a shrinking prefix; after pass `k` the
//! last `k` positions hold their final elements. A pass that performs no swap
//! ends the sort, so already-sorted input costs a single O(n) pass.
//!
//! Time: O(n²) worst and average, O(n) best. Space: O(1).

/// Sorts `slice` in non-decreasing natural order.
///
/// # Examples
///
/// ```rust
/// use canon_algos::sorting::bubble_sort;
///
/// let mut v = [5, 2, 9, 1, 5, 6];
/// bubble_sort(&mut v);
/// assert_eq!(v, [1, 2, 5, 5, 6, 9]);
/// ```
pub fn bubble_sort<T: Ord>(slice: &mut [T]) {
    bubble_sort_by(slice, |a, b| a < b);
}

/// Sorts `slice` so that no element is strictly `less` than its predecessor.
///
/// Adjacent elements are swapped only when `less(next, current)` holds, so
/// equal elements never trade places.
pub fn bubble_sort_by<T, F>(slice: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut end = slice.len();

    while end > 1 {
        let mut swapped = false;
        for next in 1..end {
            if less(&slice[next], &slice[next - 1]) {
                slice.swap(next - 1, next);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
}

/// Sorts `slice` by the `Ord` order of the key `f` extracts from each element.
pub fn bubble_sort_by_key<T, K, F>(slice: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    bubble_sort_by(slice, |a, b| f(a) < f(b));
}
