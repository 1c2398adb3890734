//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Running with no arguments renumbers the current directory.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::CONFIG_ENV;
use crate::config::types::{Config, LogLevel};

/// CLI wrapper for the folder_renumber library.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Renumber '<N>. <label>' folders without name collisions"
)]
pub struct Args {
    /// Folder whose immediate children get renumbered.
    /// Defaults to the config file's folder, else the current directory.
    #[arg(value_name = "BASE_DIR", value_hint = ValueHint::DirPath)]
    pub base_dir: Option<PathBuf>,

    /// Explicit config file (otherwise `renumber.xml` in the base directory, if present).
    #[arg(
        long,
        short = 'c',
        env = CONFIG_ENV,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        help = "Read settings and the map from this XML file"
    )]
    pub config: Option<PathBuf>,

    /// Print the planned renames but do not touch the filesystem.
    #[arg(
        long,
        short = 'n',
        help = "Show what would be renamed, but do not rename anything"
    )]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print the config source and the effective map, then exit.
    #[arg(long, help = "Print the config source and map in use, then exit")]
    pub print_config: bool,

    /// Write a `renumber.xml` holding the effective map into the base directory, then exit.
    #[arg(long, help = "Write a template renumber.xml into the base directory and exit")]
    pub init_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(base) = &self.base_dir {
            cfg.base_dir = base.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
