//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Parallelism knobs shared by the BFS and coloring engines.
///
/// ```
/// use pargraphs::ParallelConfig;
///
/// let cfg = ParallelConfig::from_json(r#"{ "threads": 3 }"#).unwrap();
/// assert_eq!(cfg.resolved_threads(), 3);
/// assert_eq!(cfg.min_parallel_rows, ParallelConfig::default().min_parallel_rows);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Worker threads for the parallel BFS engine (0 = available parallelism).
    pub threads: usize,
    /// Below this many matrix rows the sparse kernels run on the calling thread.
    pub min_parallel_rows: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            min_parallel_rows: 1024,
        }
    }
}

impl ParallelConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns a copy with an explicit worker count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Returns a copy with a different sequential cutoff for the sparse kernels.
    pub fn with_min_parallel_rows(mut self, rows: usize) -> Self {
        self.min_parallel_rows = rows;
        self
    }

    /// Builds a dedicated rayon pool when `threads` is set.
    ///
    /// `Ok(None)` means "use the global pool". A pool that cannot be built is
    /// surfaced rather than replaced by sequential execution.
    pub fn build_pool(&self) -> Result<Option<rayon::ThreadPool>> {
        if self.threads == 0 {
            return Ok(None);
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("pargraphs-{i}"))
            .build()?;
        Ok(Some(pool))
    }

    /// Runs `op` on a rayon pool sized by this configuration.
    pub fn install<R, F>(&self, op: F) -> Result<R>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        let pool = self.build_pool()?;
        Ok(run_in(pool.as_ref(), op))
    }

    /// Worker count after resolving `0` to the machine's available parallelism.
    pub fn resolved_threads(&self) -> usize {
        if self.threads != 0 {
            return self.threads;
        }
        std::thread::available_parallelism().map_or(1, |n| n.get())
    }
}

/// Runs `op` inside `pool`, or on the current (global) pool when `None`.
pub(crate) fn run_in<R, F>(pool: Option<&rayon::ThreadPool>, op: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    match pool {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    #[test]
    fn zero_threads_resolves_to_at_least_one() {
        assert!(ParallelConfig::default().resolved_threads() >= 1);
        assert_eq!(ParallelConfig::default().with_threads(5).resolved_threads(), 5);
    }

    #[test]
    fn install_runs_on_sized_pool() {
        let cfg = ParallelConfig::default().with_threads(2);
        let seen = cfg.install(rayon::current_num_threads).unwrap();
        assert_eq!(seen, 2);
        assert_eq!(ParallelConfig::default().install(|| 7).unwrap(), 7);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = ParallelConfig::from_json("{ threads: }").unwrap_err();
        assert!(matches!(err, GraphError::Config(_)));
    }

    #[test]
    fn json_overrides_only_given_fields() {
        let cfg = ParallelConfig::from_json(r#"{ "min_parallel_rows": 8 }"#).unwrap();
        assert_eq!(cfg.threads, 0);
        assert_eq!(cfg.min_parallel_rows, 8);
    }
}
