//! Parallel iteration abstraction for WASM compatibility.
//!
//! Batch detection over per-model series fans out one detector call per
//! series. On native targets with the `parallel` feature this runs on
//! the rayon thread pool; on WASM or without the feature it falls back
//! to sequential iteration. Each call only reads its own input, so no
//! coordination is required either way.

/// Macro for conditionally parallel iteration over ranges.
///
/// When the `parallel` feature is enabled, uses `into_par_iter()`.
/// Otherwise, uses `into_iter()` for sequential execution.
///
/// # Examples
///
/// ```ignore
/// use crate::iter_maybe_parallel;
///
/// let results: Vec<_> = iter_maybe_parallel!(0..series_list.len())
///     .map(|i| detect(&series_list[i], &config))
///     .collect();
/// ```
#[macro_export]
macro_rules! iter_maybe_parallel {
    ($expr:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::IntoParallelIterator;

            IntoParallelIterator::into_par_iter($expr)
        }
        #[cfg(not(feature = "parallel"))]
        {
            IntoIterator::into_iter($expr)
        }
    }};
}

// Re-export at module level
pub use iter_maybe_parallel;
