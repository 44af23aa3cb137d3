//! Linear recurrences evaluated bottom-up.

pub mod fibonacci;

pub use fibonacci::{fibonacci, fibonacci_with, Fibonacci};
