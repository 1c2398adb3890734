//! I/O helper utilities.
//!
//! Small adapters that enrich io::Error with the operation, the path and a
//! hint about what usually causes that error during a folder rename.
//!
//! Usage:
//!   fs::rename(a, b).map_err(io_error_with_help_io("rename", a))?;   // io::Result
//!   fs::read_dir(d).map_err(io_error_with_help("list", d))?;         // anyhow::Result

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" (permission denied; the base directory must be writable)");
                }
                libc::EXDEV => {
                    msg.push_str(" (cross-filesystem; staging names must stay in the base directory)");
                }
                libc::EBUSY => {
                    msg.push_str(" (resource busy; a process may have the folder open or mounted)");
                }
                libc::ENOENT => {
                    msg.push_str(" (path not found; was the folder renamed by someone else?)");
                }
                libc::EEXIST | libc::ENOTEMPTY => {
                    msg.push_str(" (target already exists; refusing to replace it)");
                }
                libc::EROFS => {
                    msg.push_str(" (read-only filesystem)");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str(" (name too long; shorten the label or staging prefix)");
                }
                libc::ELOOP => {
                    msg.push_str(" (too many symbolic link levels)");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" (access denied; check permissions)"), // ERROR_ACCESS_DENIED
                32 => msg.push_str(" (sharing violation; folder is in use)"), // ERROR_SHARING_VIOLATION
                2 | 3 => msg.push_str(" (path not found)"), // FILE / PATH NOT FOUND
                80 | 183 => msg.push_str(" (target already exists)"), // FILE_EXISTS / ALREADY_EXISTS
                206 => msg.push_str(" (name too long)"), // ERROR_FILENAME_EXCED_RANGE
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" (permission denied; the base directory must be writable)");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" (path not found; was the folder renamed by someone else?)");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str(" (target already exists; refusing to replace it)");
            }
            _ => {}
        }
    }

    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Adapter for io::Result code: keeps the original ErrorKind, enriches the message.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
