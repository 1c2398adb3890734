//! Core configuration types.
//! - Config carries everything one renumbering run needs, passed explicitly.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::renumber::map::RenumberMap;
use crate::renumber::name::{DEFAULT_PAD_WIDTH, DEFAULT_STAGING_PREFIX};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Progress lines plus a summary (default)
    #[default]
    Normal,
    /// Per-rename diagnostics
    Info,
    /// Everything, including skipped folders
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one renumbering run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose immediate children get renumbered
    pub base_dir: PathBuf,
    /// Old ordinal -> new ordinal
    pub map: RenumberMap,
    /// Marker placed in front of phase-1 names
    pub staging_prefix: String,
    /// Zero-padding width of committed ordinals
    pub pad_width: usize,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, print the renames but do not touch the filesystem
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            map: RenumberMap::builtin(),
            staging_prefix: DEFAULT_STAGING_PREFIX.to_string(),
            pad_width: DEFAULT_PAD_WIDTH,
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
        }
    }
}

impl Config {
    /// Construct a Config for `base_dir` and `map`; other fields use defaults.
    pub fn new(base_dir: impl Into<PathBuf>, map: RenumberMap) -> Self {
        Self {
            base_dir: base_dir.into(),
            map,
            ..Default::default()
        }
    }
}
