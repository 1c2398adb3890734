//! Filesystem operations used by the renumberer.

mod helpers;
mod rename;
#[cfg(unix)]
mod util;

pub use helpers::{io_error_with_help, io_error_with_help_io};
pub use rename::rename_no_clobber;
