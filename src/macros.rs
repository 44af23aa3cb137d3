//! Crate-private logging shims.
//!
//! Events go through `tracing` when the `tracing` feature is enabled and
//! compile away entirely otherwise.

/// Emits a `tracing::trace!` event when the `tracing` feature is on.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

/// Emits a `tracing::debug!` event when the `tracing` feature is on.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}
