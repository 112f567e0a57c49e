pub mod copy;
pub mod engine;
pub mod failure;
pub mod progress;
pub mod scan;
pub mod stats;

use std::time::Duration;

/// Tunable behavior for one copy operation.
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Restore source timestamps on copied files.
    pub preserve_times: bool,
    /// Add the owner read bit on source files before copying (best effort).
    pub widen_source_reads: bool,
    /// Minimum gap between intermediate progress emissions.
    pub progress_interval: Duration,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            preserve_times: true,
            widen_source_reads: true,
            progress_interval: Duration::from_millis(500),
        }
    }
}
