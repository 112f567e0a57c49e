/// Whether the process runs with privileges that bypass file permissions.
///
/// Drives the post-run hint only; copying itself never requires elevation.
#[cfg(unix)]
pub fn is_elevated() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_elevated() -> bool {
    false
}
