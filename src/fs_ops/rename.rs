//! No-clobber rename helper.
//! - Refuses to replace an existing entry (POSIX rename silently replaces empty directories).
//! - On Unix, best-effort fsync of the parent directory after rename.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::errors::RenumberError;

use super::helpers::io_error_with_help_io;

/// Rename `src` to `dst` inside the same directory, failing if `dst` exists.
pub fn rename_no_clobber(src: &Path, dst: &Path) -> Result<()> {
    if fs::symlink_metadata(dst).is_ok() {
        return Err(RenumberError::TargetExists(dst.to_path_buf()).into());
    }

    fs::rename(src, dst)
        .map_err(io_error_with_help_io("rename", src))
        .with_context(|| format!("rename '{}' -> '{}'", src.display(), dst.display()))?;

    // Ignore fsync errors to avoid turning a successful rename into a failure.
    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
