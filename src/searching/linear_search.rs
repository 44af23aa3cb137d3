//! Linear search over forward iterators.
//!
//! Time: O(n). Space: O(1). Iteration stops at the first match.

use std::borrow::Borrow;

/// Returns the position of the first item equal to `value`, or `None`.
///
/// Accepts anything iterable whose items borrow as `T`, so slices, vectors,
/// linked lists and plain iterators all work.
///
/// # Examples
///
/// ```rust
/// use canon_algos::searching::linear_search;
///
/// let v = vec![1, 3, 5, 7, 9];
/// assert_eq!(linear_search(&v, &5), Some(2));
/// assert_eq!(linear_search(&v, &10), None);
/// ```
pub fn linear_search<I, T>(items: I, value: &T) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    items.into_iter().position(|item| item.borrow() == value)
}

/// Returns the position of the first item satisfying `pred`, or `None`.
///
/// # Examples
///
/// ```rust
/// use canon_algos::searching::linear_search_if;
///
/// let v = [1, 3, 5, 7, 9];
/// assert_eq!(linear_search_if(&v, |&x| x > 6), Some(3));
/// assert_eq!(linear_search_if(&v, |&x| x > 10), None);
/// ```
pub fn linear_search_if<I, P>(items: I, mut pred: P) -> Option<usize>
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    items.into_iter().position(|item| pred(item))
}
