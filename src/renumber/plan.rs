//! Rename planning.
//!
//! A plan is computed entirely up front from one scan of the base directory,
//! so every ambiguity is reported before the first rename happens.

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::types::Config;
use crate::errors::RenumberError;

use super::index::DirIndex;
use super::map::RenumberMap;
use super::name::{DEFAULT_PAD_WIDTH, DEFAULT_STAGING_PREFIX};

/// Widest zero-padding accepted for committed ordinals (u32 has 10 digits).
pub const MAX_PAD_WIDTH: usize = 10;

/// Naming knobs that shape staging and final names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOptions {
    pub staging_prefix: String,
    pub pad_width: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            staging_prefix: DEFAULT_STAGING_PREFIX.to_string(),
            pad_width: DEFAULT_PAD_WIDTH,
        }
    }
}

impl PlanOptions {
    /// A staging name must never be empty, look like a numbered folder, or
    /// leave the base directory; otherwise phase 1 could land on a live name.
    pub fn validate(&self) -> Result<()> {
        let prefix = self.staging_prefix.as_str();
        let invalid = |msg: String| -> anyhow::Error { RenumberError::InvalidNaming(msg).into() };
        if prefix.is_empty() {
            return Err(invalid("staging_prefix must not be empty".into()));
        }
        if prefix.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid(format!("staging_prefix '{prefix}' must not start with a digit")));
        }
        if prefix.contains(['/', '\\']) || prefix == "." || prefix == ".." {
            return Err(invalid(format!("staging_prefix '{prefix}' must be a plain name fragment")));
        }
        if self.pad_width == 0 || self.pad_width > MAX_PAD_WIDTH {
            return Err(invalid(format!(
                "pad_width must be between 1 and {MAX_PAD_WIDTH}, got {}",
                self.pad_width
            )));
        }
        Ok(())
    }
}

impl From<&Config> for PlanOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            staging_prefix: cfg.staging_prefix.clone(),
            pad_width: cfg.pad_width,
        }
    }
}

/// One folder's journey: source -> staging -> target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub old_ordinal: u32,
    pub new_ordinal: u32,
    pub label: String,
    pub source: PathBuf,
    pub staging: PathBuf,
    pub target: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RenumberPlan {
    base: PathBuf,
    /// Phase-1 order: descending old ordinal.
    staged: Vec<PlannedRename>,
    /// Map keys with no matching folder, descending.
    skipped: Vec<u32>,
}

impl RenumberPlan {
    /// Scan `base` and resolve every map entry against it.
    pub fn build(base: &Path, map: &RenumberMap, opts: &PlanOptions) -> Result<Self> {
        opts.validate()?;
        let index = DirIndex::scan(base)?;
        debug!(base = %base.display(), folders = index.len(), entries = map.len(), "indexed base directory");

        let mut staged = Vec::new();
        let mut skipped = Vec::new();
        for (old, new) in map.descending() {
            let Some(dir) = index.unique(old)? else {
                debug!(ordinal = old, "no folder for ordinal; skipping");
                skipped.push(old);
                continue;
            };
            let next = dir.name.with_ordinal(new);
            staged.push(PlannedRename {
                old_ordinal: old,
                new_ordinal: new,
                label: dir.name.label.clone(),
                source: dir.path.clone(),
                staging: base.join(next.staging(&opts.staging_prefix, opts.pad_width)),
                target: base.join(next.render(opts.pad_width)),
            });
        }

        let moving: BTreeSet<u32> = staged.iter().map(|r| r.old_ordinal).collect();
        for r in &staged {
            if !moving.contains(&r.new_ordinal)
                && let Some(holder) = index.holders(r.new_ordinal).first()
            {
                return Err(RenumberError::TargetOccupied {
                    ordinal: r.new_ordinal,
                    holder: holder.path.clone(),
                }
                .into());
            }
            if std::fs::symlink_metadata(&r.staging).is_ok() {
                return Err(RenumberError::StagingOccupied(r.staging.clone()).into());
            }
        }

        Ok(Self {
            base: base.to_path_buf(),
            staged,
            skipped,
        })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Renames in phase-1 order (descending old ordinal).
    pub fn phase_one(&self) -> &[PlannedRename] {
        &self.staged
    }

    /// Renames in phase-2 order (ascending new ordinal).
    pub fn phase_two(&self) -> Vec<&PlannedRename> {
        let mut commits: Vec<&PlannedRename> = self.staged.iter().collect();
        commits.sort_by_key(|r| r.new_ordinal);
        commits
    }

    pub fn skipped(&self) -> &[u32] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}
