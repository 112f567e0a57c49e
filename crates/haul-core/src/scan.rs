use std::path::Path;

use walkdir::WalkDir;

/// Totals from the pre-scan pass, used only for percentage math. Subtrees
/// the walk cannot enter are simply absent, so the counts are advisory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTotals {
    pub files: u64,
    pub dirs: u64,
}

/// Count the files and directories beneath `root`. The root itself is not
/// counted. Never fails: unreadable subtrees are silently excluded, and an
/// unreadable root yields zero totals.
pub fn count_items(root: &Path) -> ScanTotals {
    let mut totals = ScanTotals::default();
    for entry in WalkDir::new(root).into_iter().flatten() {
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().is_dir() {
            totals.dirs += 1;
        } else {
            totals.files += 1;
        }
    }
    totals
}
