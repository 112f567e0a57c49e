use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;

/// Copy one file and, when asked, carry its timestamps over.
///
/// Returns the number of bytes written. Timestamp propagation is part of
/// the copy contract, so a metadata read failure surfaces as a copy error.
pub fn copy_file(src: &Path, dst: &Path, preserve_times: bool) -> io::Result<u64> {
    let bytes = fs::copy(src, dst)?;
    if preserve_times {
        let metadata = fs::metadata(src)?;
        let mtime = FileTime::from_system_time(metadata.modified()?);
        let atime = metadata
            .accessed()
            .map(FileTime::from_system_time)
            .unwrap_or(mtime);
        filetime::set_file_times(dst, atime, mtime)?;
    }
    Ok(bytes)
}

/// Best-effort widening of the owner read bit before a copy attempt.
///
/// A source that is write-only for its owner would fail the read in
/// [`copy_file`]; adding the bit first lets the copy go through. Any
/// failure here is logged and ignored.
#[cfg(unix)]
pub fn widen_read_permission(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return,
    };
    let mode = metadata.permissions().mode();
    if mode & 0o400 != 0 {
        return;
    }
    if let Err(err) = fs::set_permissions(path, fs::Permissions::from_mode(mode | 0o400)) {
        log::debug!("Could not widen read access on {}: {}", path.display(), err);
    }
}

#[cfg(not(unix))]
pub fn widen_read_permission(_path: &Path) {}
