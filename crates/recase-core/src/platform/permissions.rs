/// Read/write access checks for the target directory.
///
/// Renaming entries needs read, write and search permission on the
/// directory that holds them. The check asks the kernel for the effective
/// user's access rather than inspecting mode bits, so ownership, groups and
/// ACLs are all taken into account.
use std::io;
use std::path::Path;

/// Fail unless the current user may list, enter and modify `path`.
#[cfg(unix)]
pub fn check_access(path: &Path) -> io::Result<()> {
    use nix::unistd::{access, AccessFlags};

    access(path, AccessFlags::R_OK | AccessFlags::W_OK | AccessFlags::X_OK).map_err(io::Error::from)
}

/// Fail unless the listing of `path` opens and it is not marked read-only.
#[cfg(not(unix))]
pub fn check_access(path: &Path) -> io::Result<()> {
    std::fs::read_dir(path)?;
    if std::fs::metadata(path)?.permissions().readonly() {
        return Err(io::Error::from(io::ErrorKind::PermissionDenied));
    }
    Ok(())
}
