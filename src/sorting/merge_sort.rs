//! Top-down merge sort.
//!
//! The slice is split at `len / 2`, both halves are sorted in place, and the
//! two adjacent runs are merged through a scratch buffer sized to the merged
//! range. On ties the merge takes from the left run, which keeps the sort stable.
//!
//! Time: O(n log n) in every case. Space: O(n) scratch plus O(log n) recursion.

/// Sorts `slice` in non-decreasing natural order.
///
/// # Examples
///
/// ```rust
/// use canon_algos::sorting::merge_sort;
///
/// let mut v = vec![5, 2, 9, 1, 5, 6];
/// merge_sort(&mut v);
/// assert_eq!(v, [1, 2, 5, 5, 6, 9]);
/// ```
pub fn merge_sort<T: Ord + Clone>(slice: &mut [T]) {
    merge_sort_by(slice, |a, b| a < b);
}

/// Sorts `slice` so that no element is strictly `less` than its predecessor.
pub fn merge_sort_by<T, F>(slice: &mut [T], mut less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    sort_range(slice, &mut less);
}

/// Sorts `slice` by the `Ord` order of the key `f` extracts from each element.
pub fn merge_sort_by_key<T, K, F>(slice: &mut [T], mut f: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(slice, |a, b| f(a) < f(b));
}

fn sort_range<T, F>(slice: &mut [T], less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = slice.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    sort_range(&mut slice[..mid], less);
    sort_range(&mut slice[mid..], less);
    merge(slice, mid, less);
}

/// Merges the sorted runs `slice[..mid]` and `slice[mid..]` in place.
fn merge<T, F>(slice: &mut [T], mid: usize, less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(slice.len());
    {
        let (left, right) = slice.split_at(mid);
        let (mut i, mut j) = (0, 0);

        while i < left.len() && j < right.len() {
            // Right wins only when strictly smaller.
            if less(&right[j], &left[i]) {
                merged.push(right[j].clone());
                j += 1;
            } else {
                merged.push(left[i].clone());
                i += 1;
            }
        }

        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
    }

    for (slot, value) in slice.iter_mut().zip(merged) {
        *slot = value;
    }
}
