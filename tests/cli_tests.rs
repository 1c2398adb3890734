use clap::Parser;
use folder_renumber::cli::Args;
use folder_renumber::config::types::{Config, LogLevel};
use std::path::PathBuf;

#[test]
fn no_arguments_is_valid() {
    let args = Args::try_parse_from(["folder_renumber"]).unwrap();
    assert!(args.base_dir.is_none());
    assert!(!args.dry_run);
    assert!(args.effective_log_level().is_none());
}

#[test]
fn positional_base_dir() {
    let args = Args::parse_from(["folder_renumber", "/srv/course"]);
    assert_eq!(args.base_dir, Some(PathBuf::from("/srv/course")));
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["folder_renumber", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["folder_renumber", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["folder_renumber", "--log-level", "shouty"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "folder_renumber",
        "/srv/course",
        "--log-level",
        "info",
        "--log-file",
        "/tmp/renumber.log",
        "-n",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.base_dir, PathBuf::from("/srv/course"));
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/renumber.log")));
    assert!(cfg.dry_run);
}

#[test]
fn unset_flags_leave_config_alone() {
    let args = Args::parse_from(["folder_renumber"]);
    let mut cfg = Config::default();
    cfg.base_dir = PathBuf::from("/from/xml");
    cfg.log_level = LogLevel::Quiet;
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.base_dir, PathBuf::from("/from/xml"));
    assert_eq!(cfg.log_level, LogLevel::Quiet);
    assert!(!cfg.dry_run);
}
