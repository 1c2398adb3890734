//! Config validation logic.
//! Verifies the base directory and the naming knobs before any rename is planned.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use crate::errors::RenumberError;
use crate::fs_ops::io_error_with_help;
use crate::renumber::plan::PlanOptions;

use super::types::Config;

impl Config {
    /// Validate the base directory, staging prefix and pad width.
    pub fn validate(&self) -> Result<()> {
        ensure_dir_exists_and_is_dir(&self.base_dir)?;
        ensure_readable(&self.base_dir)?;
        PlanOptions::from(self).validate()?;

        info!(
            base = %self.base_dir.display(),
            entries = self.map.len(),
            staging_prefix = %self.staging_prefix,
            dry_run = self.dry_run,
            "Config validated"
        );
        Ok(())
    }
}

/// Validate and canonicalize the base directory in place.
pub fn validate_and_normalize(cfg: &mut Config) -> Result<()> {
    cfg.validate()?;
    cfg.base_dir = dunce::canonicalize(&cfg.base_dir)
        .with_context(|| format!("canonicalize base_dir '{}'", cfg.base_dir.display()))?;
    Ok(())
}

fn ensure_dir_exists_and_is_dir(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => {
            error!("base_dir is missing or not a directory: {}", path.display());
            Err(RenumberError::BaseInvalid(path.to_path_buf()).into())
        }
    }
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path) -> Result<()> {
    fs::read_dir(path).map_err(io_error_with_help("read base_dir", path))?;
    debug!("base_dir readable: {}", path.display());
    Ok(())
}
