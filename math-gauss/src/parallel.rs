//! Parallel utilities with feature-gated implementations
//!
//! With the `native` feature the helpers run on rayon; without it they fall
//! back to plain sequential iteration with the same results.

/// Check if parallel processing is available
#[cfg(feature = "native")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "native"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Number of worker threads the parallel helpers will use
#[cfg(feature = "native")]
pub fn current_num_threads() -> usize {
    rayon::current_num_threads()
}

/// Number of worker threads the parallel helpers will use
#[cfg(not(feature = "native"))]
pub fn current_num_threads() -> usize {
    1
}

/// Parallel map over mutable elements, results kept in input order
#[cfg(feature = "native")]
pub fn parallel_map_mut<T, U, F>(data: &mut [T], f: F) -> Vec<U>
where
    T: Send,
    U: Send,
    F: Fn(&mut T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    data.par_iter_mut().map(f).collect()
}

/// Sequential map over mutable elements (fallback)
#[cfg(not(feature = "native"))]
pub fn parallel_map_mut<T, U, F>(data: &mut [T], f: F) -> Vec<U>
where
    F: Fn(&mut T) -> U,
{
    data.iter_mut().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map_mut() {
        let mut data = vec![1, 2, 3, 4, 5];
        let old = parallel_map_mut(&mut data, |x| {
            let prev = *x;
            *x *= 2;
            prev
        });
        assert_eq!(old, vec![1, 2, 3, 4, 5]);
        assert_eq!(data, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_thread_count_positive() {
        assert!(current_num_threads() >= 1);
    }
}
