//! Plan execution: stage every folder, then commit every staged folder.
//!
//! Nothing is rolled back on failure; the tree is left exactly as far as the
//! renames got.

use anyhow::Result;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::fs_ops::rename_no_clobber;
use crate::output as out;

use super::plan::RenumberPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Source -> staging name.
    Stage,
    /// Staging name -> final name.
    Commit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Stage => f.write_str("stage"),
            Phase::Commit => f.write_str("commit"),
        }
    }
}

/// Observer for rename progress.
pub trait Progress {
    fn phase_started(&mut self, phase: Phase, dry_run: bool);
    fn renamed(&mut self, phase: Phase, from: &Path, to: &Path, dry_run: bool);
    fn finished(&mut self, report: &RenumberReport);
}

/// Outcome of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenumberReport {
    /// (original path, final path), in commit order.
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Map keys with no matching folder.
    pub skipped: Vec<u32>,
    pub dry_run: bool,
}

/// Run both phases of `plan`. With `dry_run` the same progress is reported
/// but the filesystem is not touched.
pub fn apply_plan(plan: &RenumberPlan, dry_run: bool, progress: &mut dyn Progress) -> Result<RenumberReport> {
    progress.phase_started(Phase::Stage, dry_run);
    for r in plan.phase_one() {
        if !dry_run {
            rename_no_clobber(&r.source, &r.staging)?;
        }
        debug!(phase = %Phase::Stage, from = %r.source.display(), to = %r.staging.display(), dry_run, "renamed");
        progress.renamed(Phase::Stage, &r.source, &r.staging, dry_run);
    }

    progress.phase_started(Phase::Commit, dry_run);
    let mut renamed = Vec::with_capacity(plan.phase_one().len());
    for r in plan.phase_two() {
        if !dry_run {
            rename_no_clobber(&r.staging, &r.target)?;
        }
        debug!(phase = %Phase::Commit, from = %r.staging.display(), to = %r.target.display(), dry_run, "renamed");
        progress.renamed(Phase::Commit, &r.staging, &r.target, dry_run);
        renamed.push((r.source.clone(), r.target.clone()));
    }

    let report = RenumberReport {
        renamed,
        skipped: plan.skipped().to_vec(),
        dry_run,
    };
    progress.finished(&report);
    Ok(report)
}

/// Prints the progress lines users see on stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

fn display_name(p: &Path) -> std::borrow::Cow<'_, str> {
    p.file_name().unwrap_or(OsStr::new("")).to_string_lossy()
}

impl Progress for ConsoleProgress {
    fn phase_started(&mut self, phase: Phase, _dry_run: bool) {
        match phase {
            Phase::Stage => out::print_user("Phase 1: Renaming to temporary names..."),
            Phase::Commit => out::print_user("\nPhase 2: Renaming to final names..."),
        }
    }

    fn renamed(&mut self, _phase: Phase, from: &Path, to: &Path, dry_run: bool) {
        let prefix = if dry_run { "dry-run: " } else { "" };
        out::print_user(&format!("  {prefix}{} -> {}", display_name(from), display_name(to)));
    }

    fn finished(&mut self, report: &RenumberReport) {
        out::print_user("");
        if report.dry_run {
            out::print_info(&format!(
                "Dry-run: {} folder(s) would be renumbered, {} map key(s) without a folder",
                report.renamed.len(),
                report.skipped.len()
            ));
        } else {
            out::print_success(&format!(
                "Folder renumbering complete! ({} renamed, {} skipped)",
                report.renamed.len(),
                report.skipped.len()
            ));
        }
    }
}
