//! Config/log path helpers and symlink checks.

use anyhow::{Context, Result};
use dirs::data_dir;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_FILE_NAME;

/// Config file expected inside a base directory.
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Pick the config file for this run.
///
/// Search order:
///  - `explicit` (from `--config` / `FOLDER_RENUMBER_CONFIG`), returned as-is so a
///    missing file is reported by the loader
///  - `renumber.xml` inside `base_dir`, or the current directory when no base is given
///
/// Returns None when no config file applies and the built-in table should be used.
pub fn resolve_config_path(explicit: Option<&Path>, base_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(p) = explicit {
        return Ok(Some(p.to_path_buf()));
    }
    let dir = match base_dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().context("determine current directory")?,
    };
    let candidate = config_path_in(&dir);
    Ok(candidate.is_file().then_some(candidate))
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("folder_renumber");
        base.push("folder_renumber.log");
        Some(base)
    } else {
        std::env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("folder_renumber")
                .join("folder_renumber.log")
        })
    }
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        if let Ok(meta) = fs::symlink_metadata(anc)
            && meta.file_type().is_symlink()
        {
            return Ok(true);
        }
        p = anc.parent();
    }
    Ok(false)
}
