use folder_renumber::{Config, RenumberError, RenumberMap, validate_and_normalize};
use tempfile::tempdir;

#[test]
fn valid_config_is_canonicalized() {
    let td = tempdir().unwrap();
    let mut cfg = Config::new(td.path().join("."), RenumberMap::builtin());
    validate_and_normalize(&mut cfg).unwrap();
    assert_eq!(cfg.base_dir, dunce::canonicalize(td.path()).unwrap());
}

#[test]
fn missing_base_dir_is_invalid() {
    let td = tempdir().unwrap();
    let cfg = Config::new(td.path().join("nope"), RenumberMap::default());
    let err = cfg.validate().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RenumberError>(),
        Some(RenumberError::BaseInvalid(_))
    ));
}

#[test]
fn base_dir_must_be_a_directory() {
    let td = tempdir().unwrap();
    let file = td.path().join("01. file");
    std::fs::write(&file, "").unwrap();
    let cfg = Config::new(file, RenumberMap::default());
    assert!(cfg.validate().is_err());
}

#[test]
fn staging_prefix_starting_with_digit_is_rejected() {
    let td = tempdir().unwrap();
    let mut cfg = Config::new(td.path(), RenumberMap::default());
    cfg.staging_prefix = "9tmp".into();
    let err = cfg.validate().unwrap_err();
    assert!(format!("{err}").contains("must not start with a digit"));
}

#[test]
fn pad_width_bounds() {
    let td = tempdir().unwrap();
    let mut cfg = Config::new(td.path(), RenumberMap::default());
    cfg.pad_width = 0;
    assert!(cfg.validate().is_err());
    cfg.pad_width = folder_renumber::config::MAX_PAD_WIDTH + 1;
    assert!(cfg.validate().is_err());
    cfg.pad_width = 4;
    assert!(cfg.validate().is_ok());
}
