//! Progress reporting for tree copies.
//!
//! The engine does not know where progress ends up; callers hand it a
//! [`ProgressSink`]. The CLI prints to stdout and tests record snapshots
//! for assertions. [`NoopSink`] discards everything.

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::scan::ScanTotals;
use crate::stats::CopyStats;

/// Point-in-time view of a running copy, captured after each copied unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub files_copied: u64,
    pub dirs_created: u64,
    pub total_files: u64,
    pub total_dirs: u64,
    pub files_skipped: u64,
    pub dirs_skipped: u64,
}

impl ProgressSnapshot {
    pub fn capture(stats: &CopyStats, totals: &ScanTotals) -> Self {
        Self {
            files_copied: stats.files_copied,
            dirs_created: stats.dirs_created,
            total_files: totals.files,
            total_dirs: totals.dirs,
            files_skipped: stats.files_skipped,
            dirs_skipped: stats.dirs_skipped,
        }
    }

    pub fn file_percent(&self) -> f64 {
        percent(self.files_copied, self.total_files)
    }

    pub fn dir_percent(&self) -> f64 {
        percent(self.dirs_created, self.total_dirs)
    }

    /// Completed units measured against everything the scan found.
    pub fn overall_percent(&self) -> f64 {
        percent(
            self.files_copied + self.dirs_created,
            self.total_files + self.total_dirs,
        )
    }

    pub fn skipped(&self) -> u64 {
        self.files_skipped + self.dirs_skipped
    }
}

// An empty total reads as fully complete rather than dividing by zero.
fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        100.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Progress: {:.1}% | Directory: {}/{} ({:.1}%) | Files: {}/{} ({:.1}%) | Skipped: {}",
            self.overall_percent(),
            self.dirs_created,
            self.total_dirs,
            self.dir_percent(),
            self.files_copied,
            self.total_files,
            self.file_percent(),
            self.skipped(),
        )
    }
}

/// Receives lifecycle events from [`CopyEngine`](crate::engine::CopyEngine).
///
/// Every method has a no-op default so sinks implement only what they need.
pub trait ProgressSink {
    /// The pre-copy scan is about to walk `root`.
    fn scan_started(&mut self, _root: &Path) {}

    /// The scan finished; `totals` is the denominator for later snapshots.
    fn scan_finished(&mut self, _totals: &ScanTotals) {}

    /// A throttled progress update.
    fn progress(&mut self, _snapshot: &ProgressSnapshot) {}

    /// The copy pass is over, whatever the outcome.
    fn done(&mut self, _stats: &CopyStats) {}
}

/// Sink that ignores every event.
pub struct NoopSink;

impl ProgressSink for NoopSink {}

/// Rate limiter for progress updates.
///
/// The first and final unit always pass so short copies still produce
/// output; anything in between must wait out the interval.
pub struct Throttle {
    interval: Duration,
    last_emit: Instant,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_emit: Instant::now(),
        }
    }

    pub fn should_emit(&mut self, count: u64, total: u64) -> bool {
        if count == 1 || count == total || self.last_emit.elapsed() >= self.interval {
            self.last_emit = Instant::now();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_totals_read_as_complete() {
        let snap = ProgressSnapshot::default();
        assert_eq!(snap.overall_percent(), 100.0);
        assert_eq!(snap.file_percent(), 100.0);
        assert_eq!(snap.dir_percent(), 100.0);
    }

    #[test]
    fn display_matches_the_console_line() {
        let snap = ProgressSnapshot {
            files_copied: 1,
            dirs_created: 1,
            total_files: 2,
            total_dirs: 1,
            files_skipped: 0,
            dirs_skipped: 0,
        };
        assert_eq!(
            snap.to_string(),
            "Progress: 66.7% | Directory: 1/1 (100.0%) | Files: 1/2 (50.0%) | Skipped: 0"
        );
    }

    #[test]
    fn capture_carries_counts_and_totals() {
        let mut stats = CopyStats::default();
        stats.add_file(10);
        stats.add_dir();
        let totals = ScanTotals { files: 3, dirs: 2 };
        let snap = ProgressSnapshot::capture(&stats, &totals);
        assert_eq!(snap.files_copied, 1);
        assert_eq!(snap.dirs_created, 1);
        assert_eq!(snap.total_files, 3);
        assert_eq!(snap.total_dirs, 2);
    }

    #[test]
    fn throttle_always_passes_first_and_last() {
        let mut throttle = Throttle::new(Duration::from_secs(3600));
        assert!(throttle.should_emit(1, 4));
        assert!(!throttle.should_emit(2, 4));
        assert!(!throttle.should_emit(3, 4));
        assert!(throttle.should_emit(4, 4));
    }

    #[test]
    fn zero_interval_never_suppresses() {
        let mut throttle = Throttle::new(Duration::ZERO);
        for n in 1..=5 {
            assert!(throttle.should_emit(n, 10));
        }
    }
}
