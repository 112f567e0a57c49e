use std::path::Path;
use std::time::Duration;

use haul_core::progress::{ProgressSink, ProgressSnapshot};
use haul_core::scan::ScanTotals;
use haul_core::stats::CopyStats;
use indicatif::{ProgressBar, ProgressStyle};

pub const FAILURE_PREVIEW: usize = 5;

/// Prints engine events to stdout in the order the run produces them.
pub struct ConsoleSink {
    spinner: Option<ProgressBar>,
    show_spinner: bool,
}

impl ConsoleSink {
    pub fn new(show_spinner: bool) -> Self {
        Self {
            spinner: None,
            show_spinner,
        }
    }
}

impl ProgressSink for ConsoleSink {
    fn scan_started(&mut self, root: &Path) {
        println!("Counting files and directories...");
        if self.show_spinner {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap()
                    .tick_strings(&["-", "\\", "|", "/"]),
            );
            pb.enable_steady_tick(Duration::from_millis(120));
            pb.set_message(format!("Scanning {}", root.display()));
            self.spinner = Some(pb);
        }
    }

    fn scan_finished(&mut self, totals: &ScanTotals) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        println!(
            "Found {} files and {} directories to copy.",
            totals.files, totals.dirs
        );
        println!("{}", "-".repeat(50));
    }

    fn progress(&mut self, snapshot: &ProgressSnapshot) {
        println!("{snapshot}");
    }

    fn done(&mut self, _stats: &CopyStats) {
        println!("\nCopy complete!");
    }
}

/// Render the post-run warning block, or nothing when the run was clean.
pub fn failure_report(stats: &CopyStats, elevated: bool) -> Vec<String> {
    if stats.failures.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![
        format!(
            "Warning: {} errors occurred during copying",
            stats.failures.len()
        ),
        format!(
            "Files copied: {}, Files skipped: {}",
            stats.files_copied, stats.files_skipped
        ),
        format!(
            "Directories created: {}, Directories skipped: {}",
            stats.dirs_created, stats.dirs_skipped
        ),
        String::new(),
        "First few errors:".to_string(),
    ];
    for failure in stats.failures.iter().take(FAILURE_PREVIEW) {
        lines.push(format!("- {failure}"));
    }
    if stats.failures.len() > FAILURE_PREVIEW {
        lines.push(format!(
            "... and {} more errors",
            stats.failures.len() - FAILURE_PREVIEW
        ));
    }
    if stats.permission_failures() && !elevated {
        lines.push(String::new());
        lines.push(
            "To copy protected files and avoid permission errors, re-run with elevated privileges"
                .to_string(),
        );
    }
    lines
}
