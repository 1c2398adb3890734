use std::fs;
use tempfile::tempdir;

use folder_renumber::load_config_from_xml_path;

fn load(xml: &str) -> anyhow::Error {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("renumber.xml");
    fs::write(&cfg_path, xml).unwrap();
    load_config_from_xml_path(&cfg_path).unwrap_err()
}

#[test]
fn malformed_xml_errors() {
    let err = load("<config>\n  <base_dir>/tmp/course\n</config>");
    assert!(format!("{err}").contains("parse config xml"));
}

#[test]
fn unknown_field_is_rejected() {
    let err = load("<config><download_base>/tmp</download_base></config>");
    assert!(format!("{err:#}").contains("unknown field"), "got: {err:#}");
}

#[test]
fn shared_target_in_map_is_rejected() {
    let err = load(r#"<config><map><entry from="1" to="3"/><entry from="2" to="3"/></map></config>"#);
    assert!(format!("{err:#}").contains("both map to 3"), "got: {err:#}");
}

#[test]
fn repeated_source_in_map_is_rejected() {
    let err = load(r#"<config><map><entry from="4" to="5"/><entry from="4" to="6"/></map></config>"#);
    assert!(format!("{err:#}").contains("more than once"), "got: {err:#}");
}

#[test]
fn invalid_log_level_is_rejected() {
    let err = load("<config><log_level>loud</log_level></config>");
    assert!(format!("{err:#}").contains("invalid log_level"), "got: {err:#}");
}

#[test]
fn non_numeric_pad_width_is_rejected() {
    let err = load("<config><pad_width>wide</pad_width></config>");
    assert!(format!("{err}").contains("parse config xml"));
}

#[test]
fn missing_file_errors() {
    let td = tempdir().unwrap();
    let err = load_config_from_xml_path(&td.path().join("absent.xml")).unwrap_err();
    assert!(format!("{err}").contains("read config xml"));
}
