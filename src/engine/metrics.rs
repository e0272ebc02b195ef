//! Scan metrics.
//!
//! `scan_with_metrics` counts what each record turned into and how long the
//! pass took. Pipelines log these at `debug`; `normalize_verbose` returns them.

use super::buckets::MealBuckets;
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanMetrics {
    /// Records seen.
    pub records: usize,
    /// Header records (context updates).
    pub headers: usize,
    /// Food entries resolved to a section.
    pub foods: usize,
    /// Records skipped: no food name and no header text.
    pub inert: usize,
    /// Names appended to the accumulator; greater than `foods` when sections fan out.
    pub placements: usize,
    /// Elapsed time for the pass.
    pub elapsed: Duration,
}

/// Scan output bundled with metrics.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub buckets: MealBuckets,
    pub metrics: ScanMetrics,
}
