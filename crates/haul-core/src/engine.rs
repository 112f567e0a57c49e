//! Two-pass tree copy with per-item error tolerance.
//!
//! A run first counts files and directories so progress can be reported as
//! a fraction, then walks the source again, mirroring every directory and
//! copying every file. Individual failures are recorded and the walk moves
//! on; only the destination root itself is allowed to stop a run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use walkdir::WalkDir;

use crate::copy;
use crate::failure::{Failure, FailureKind};
use crate::progress::{ProgressSink, ProgressSnapshot, Throttle};
use crate::scan;
use crate::stats::CopyStats;
use crate::CopyOptions;

pub struct CopyEngine {
    options: CopyOptions,
}

impl CopyEngine {
    pub fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    /// Copy the contents of `source_root` into `dest_root`.
    ///
    /// Only a failure to create the destination root itself is fatal. Every
    /// other problem lands in the returned [`CopyStats`]. Files sitting in a
    /// directory whose mirror could not be created are never attempted and
    /// do not show up in any counter; subdirectories still get their own
    /// mirror attempt.
    pub fn run(
        &self,
        source_root: &Path,
        dest_root: &Path,
        sink: &mut dyn ProgressSink,
    ) -> Result<CopyStats> {
        fs::create_dir_all(dest_root).with_context(|| {
            format!("failed to create destination root {}", dest_root.display())
        })?;

        sink.scan_started(source_root);
        let totals = scan::count_items(source_root);
        sink.scan_finished(&totals);

        let mut stats = CopyStats::default();
        let mut throttle = Throttle::new(self.options.progress_interval);
        let mut failed_mirrors: HashSet<PathBuf> = HashSet::new();

        for item in WalkDir::new(source_root) {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    stats.add_failure(Failure::traversal(&err, source_root));
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            let rel = match entry.path().strip_prefix(source_root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => continue,
            };

            if entry.file_type().is_dir() {
                let mirror = dest_root.join(&rel);
                if mirror.exists() {
                    continue;
                }
                match fs::create_dir_all(&mirror) {
                    Ok(()) => {
                        stats.add_dir();
                        if throttle.should_emit(stats.dirs_created, totals.dirs) {
                            sink.progress(&ProgressSnapshot::capture(&stats, &totals));
                        }
                    }
                    Err(err) => {
                        stats.skip_dir(Failure::from_io(FailureKind::MirrorDir, &mirror, &err));
                        failed_mirrors.insert(rel);
                    }
                }
                continue;
            }

            // Symlinks and special files go through the same path as
            // regular files.
            if parent_mirror_failed(&rel, &failed_mirrors) {
                continue;
            }
            if self.options.widen_source_reads {
                copy::widen_read_permission(entry.path());
            }
            let dest = dest_root.join(&rel);
            match copy::copy_file(entry.path(), &dest, self.options.preserve_times) {
                Ok(bytes) => {
                    stats.add_file(bytes);
                    if throttle.should_emit(stats.files_copied, totals.files) {
                        sink.progress(&ProgressSnapshot::capture(&stats, &totals));
                    }
                }
                Err(err) => {
                    stats.skip_file(Failure::from_io(FailureKind::CopyFile, entry.path(), &err));
                }
            }
        }

        sink.done(&stats);
        Ok(stats)
    }
}

// Only the direct parent is consulted; every deeper directory runs its
// own mirror attempt and records its own failure.
fn parent_mirror_failed(rel: &Path, failed: &HashSet<PathBuf>) -> bool {
    if failed.is_empty() {
        return false;
    }
    match rel.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => failed.contains(parent),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_files_have_no_failed_parent() {
        let failed = HashSet::from([PathBuf::from("sub")]);
        assert!(!parent_mirror_failed(Path::new("a.txt"), &failed));
        assert!(parent_mirror_failed(Path::new("sub/a.txt"), &failed));
        assert!(!parent_mirror_failed(Path::new("other/a.txt"), &failed));
    }
}
