use crate::failure::Failure;

#[derive(Debug, Default, Clone)]
pub struct CopyStats {
    pub files_copied: u64,
    pub dirs_created: u64,
    pub files_skipped: u64,
    pub dirs_skipped: u64,
    pub bytes_copied: u64,
    pub failures: Vec<Failure>,
}

impl CopyStats {
    pub fn add_file(&mut self, bytes: u64) {
        self.files_copied += 1;
        self.bytes_copied += bytes;
    }

    pub fn add_dir(&mut self) {
        self.dirs_created += 1;
    }

    pub fn skip_file(&mut self, failure: Failure) {
        self.files_skipped += 1;
        self.failures.push(failure);
    }

    pub fn skip_dir(&mut self, failure: Failure) {
        self.dirs_skipped += 1;
        self.failures.push(failure);
    }

    pub fn add_failure(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    /// True when any recorded failure stems from a permission denial.
    pub fn permission_failures(&self) -> bool {
        self.failures.iter().any(|f| f.permission_denied)
    }
}
