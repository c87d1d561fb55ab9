use serde::{Deserialize, Serialize};

/// Configuration for scanner behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Maximum unit size to scan (in bytes)
    /// Larger units are rejected with `ScanError::UnitTooLarge`
    pub max_unit_size: usize,

    /// Scan units in parallel (for `scan_units`)
    pub parallel: bool,

    /// Number of parallel workers (None = rayon's global pool)
    pub parallel_workers: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_unit_size: 10 * 1024 * 1024, // 10 MB
            parallel: false,
            parallel_workers: None,
        }
    }
}

impl ScanConfig {
    /// Scan units one after another on the calling thread
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Scan units on rayon's global pool
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }

    /// Enable parallel scanning
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Use a dedicated pool with this many workers
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.parallel_workers = Some(workers);
        self
    }

    /// Set maximum unit size
    pub fn with_max_unit_size(mut self, size: usize) -> Self {
        self.max_unit_size = size;
        self
    }
}
