//! Application orchestrator.
//! Loads/merges config, initializes logging, validates the base directory,
//! and runs the two-phase renumbering.

use anyhow::Result;
use tracing::{debug, error, info};

use folder_renumber::cli::Args;
use folder_renumber::output as out;
use folder_renumber::{
    Config, ConsoleProgress, RenumberError, config_path_in, create_template_config,
    load_config_from_xml_path, renumber_with_config, resolve_config_path, validate_and_normalize,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Config file (if any), then CLI overrides (CLI wins).
    let cfg_path = resolve_config_path(args.config.as_deref(), args.base_dir.as_deref())?;
    let mut cfg = match cfg_path.as_deref() {
        Some(p) => load_config_from_xml_path(p)?,
        None => Config::default(),
    };
    args.apply_overrides(&mut cfg);

    if args.print_config {
        match cfg_path.as_deref() {
            Some(p) => out::print_info(&format!("Config file: {}", p.display())),
            None => out::print_info("No config file found; using the built-in map."),
        }
        out::print_info(&format!("Base directory: {}", cfg.base_dir.display()));
        for (from, to) in cfg.map.descending() {
            out::print_user(&format!("  {from} -> {to}"));
        }
        return Ok(());
    }

    if args.init_config {
        let path = config_path_in(&cfg.base_dir);
        create_template_config(&path, &cfg.map)?;
        out::print_success(&format!("A template config was written to: {}", path.display()));
        out::print_info("Edit the <map> entries, then re-run without --init-config.");
        return Ok(());
    }

    // Keep the guard alive until the end of run so file logs get flushed.
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting folder_renumber: {:?}", args);

    validate_and_normalize(&mut cfg)?;
    match renumber_with_config(&cfg, &mut ConsoleProgress) {
        Ok(report) => {
            info!(
                base = %cfg.base_dir.display(),
                renamed = report.renamed.len(),
                skipped = report.skipped.len(),
                dry_run = report.dry_run,
                "Renumbering completed"
            );
            Ok(())
        }
        Err(e) => {
            if let Some(re) = e.downcast_ref::<RenumberError>() {
                let code = re.code();
                let kind = re.kind();
                match re {
                    RenumberError::BaseInvalid(base) => {
                        error!(code, kind, base = %base.display(), "Renumbering failed")
                    }
                    RenumberError::DuplicateOrdinal { ordinal, first, second } => {
                        error!(code, kind, ordinal, first = %first.display(), second = %second.display(), "Renumbering failed")
                    }
                    RenumberError::DuplicateTarget { first, second, target } => {
                        error!(code, kind, first, second, target, "Renumbering failed")
                    }
                    RenumberError::DuplicateSource(ordinal) => {
                        error!(code, kind, ordinal, "Renumbering failed")
                    }
                    RenumberError::TargetOccupied { ordinal, holder } => {
                        error!(code, kind, ordinal, holder = %holder.display(), "Renumbering failed")
                    }
                    RenumberError::StagingOccupied(path) | RenumberError::TargetExists(path) => {
                        error!(code, kind, path = %path.display(), "Renumbering failed")
                    }
                    RenumberError::InvalidNaming(reason) => {
                        error!(code, kind, %reason, "Renumbering failed")
                    }
                }
            } else {
                error!(error = ?e, "Renumbering failed; the tree is left as far as the renames got");
            }
            Err(e)
        }
    }
}
