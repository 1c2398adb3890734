//! Collision-safe renumbering of `<N>. <label>` folders.
//!
//! Two passes: every folder that moves is first renamed into a staging
//! namespace (`TEMP_<new>. <label>`), then each staged folder is committed to
//! its final name in ascending order. Since staging names can never match a
//! live numbered folder, no rename in either pass can land on an occupied name.

pub mod execute;
pub mod index;
pub mod map;
pub mod name;
pub mod plan;

pub use execute::{ConsoleProgress, Phase, Progress, RenumberReport, apply_plan};
pub use index::{DirIndex, IndexedDir};
pub use map::RenumberMap;
pub use name::NumberedName;
pub use plan::{PlanOptions, PlannedRename, RenumberPlan};

use anyhow::Result;
use std::path::Path;

use crate::config::types::Config;

/// Renumber the folders under `base` according to `map`.
pub fn renumber(
    base: &Path,
    map: &RenumberMap,
    opts: &PlanOptions,
    dry_run: bool,
    progress: &mut dyn Progress,
) -> Result<RenumberReport> {
    let plan = RenumberPlan::build(base, map, opts)?;
    apply_plan(&plan, dry_run, progress)
}

/// Renumber using everything carried by a resolved `Config`.
pub fn renumber_with_config(cfg: &Config, progress: &mut dyn Progress) -> Result<RenumberReport> {
    renumber(&cfg.base_dir, &cfg.map, &PlanOptions::from(cfg), cfg.dry_run, progress)
}
