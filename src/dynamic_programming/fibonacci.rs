//! Generalized Fibonacci recurrence.
//!
//! Given seeds `F(0) = start` and `F(1) = next`, every later term is
//! `F(k) = F(k - 2) + F(k - 1)`. The older term is always the left operand,
//! so a non-commutative `+` still yields a well-defined sequence.
//!
//! Terms are computed bottom-up in O(n) time with O(1) extra space.

use core::ops::Add;

use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Returns the `n`-th term of the classical sequence seeded with `0` and `1`.
///
/// # Errors
///
/// Returns [`Error::NegativeIndex`] when `n < 0`.
///
/// # Examples
///
/// ```rust
/// use canon_algos::fibonacci;
///
/// assert_eq!(fibonacci::<u64>(10), Ok(55));
/// assert_eq!(fibonacci::<f64>(2), Ok(1.0));
/// assert!(fibonacci::<u64>(-1).is_err());
/// ```
pub fn fibonacci<T>(n: i64) -> Result<T>
where
    T: Zero + One + Clone,
{
    fibonacci_with(n, T::zero(), T::one())
}

/// Returns the `n`-th term of the recurrence seeded with `start` and `next`.
///
/// `n == 0` yields `start` and `n == 1` yields `next` without evaluating `+`.
///
/// # Errors
///
/// Returns [`Error::NegativeIndex`] when `n < 0`. The check happens before any
/// term is computed.
pub fn fibonacci_with<T>(n: i64, start: T, next: T) -> Result<T>
where
    T: Clone + Add<Output = T>,
{
    if n < 0 {
        debug_event!(index = n, "rejected negative recurrence index");
        return Err(Error::NegativeIndex(n));
    }
    if n == 0 {
        return Ok(start);
    }

    let mut current = start;
    let mut next = next;
    for _ in 1..n {
        let sum = current + next.clone();
        current = core::mem::replace(&mut next, sum);
    }

    Ok(next)
}

/// An unbounded iterator over the terms of a generalized Fibonacci sequence.
///
/// Yields `F(0), F(1), F(2), ...`. Each call to `next` evaluates `+` at most
/// once, and never computes a term before it is yielded, so bounded integer
/// types overflow no earlier than the term that does not fit.
///
/// ```rust
/// use canon_algos::dynamic_programming::Fibonacci;
///
/// let terms: Vec<u32> = Fibonacci::new(2, 1).take(6).collect();
/// assert_eq!(terms, [2, 1, 3, 4, 7, 11]);
/// ```
#[derive(Debug, Clone)]
pub struct Fibonacci<T> {
    current: T,
    next: T,
    emitted: u8,
}

impl<T> Fibonacci<T> {
    /// Creates an iterator seeded with `F(0) = start` and `F(1) = next`.
    pub fn new(start: T, next: T) -> Self {
        Self {
            current: start,
            next,
            emitted: 0,
        }
    }
}

impl<T: Zero + One> Default for Fibonacci<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::one())
    }
}

impl<T> Iterator for Fibonacci<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.emitted {
            0 => {
                self.emitted = 1;
                Some(self.current.clone())
            }
            1 => {
                self.emitted = 2;
                Some(self.next.clone())
            }
            _ => {
                let sum = self.current.clone() + self.next.clone();
                self.current = core::mem::replace(&mut self.next, sum);
                Some(self.next.clone())
            }
        }
    }
}
