use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const SCENARIO_XML: &str = r#"<config>
  <map>
    <entry from="8" to="10"/>
    <entry from="9" to="11"/>
    <entry from="10" to="12"/>
  </map>
</config>"#;

#[test]
fn zero_args_uses_renumber_xml_in_current_dir() {
    let td = tempdir().unwrap();
    let base = td.path();
    for n in ["08. Loops", "09. Conditionals", "10. Arrays"] {
        fs::create_dir(base.join(n)).unwrap();
    }
    fs::write(base.join("renumber.xml"), SCENARIO_XML).unwrap();

    let me = cargo::cargo_bin!("folder_renumber");
    let out = Command::new(me)
        .current_dir(base)
        .env_remove("FOLDER_RENUMBER_CONFIG")
        .output()
        .expect("spawn binary");

    let stdout = String::from_utf8_lossy(&out.stdout);
    eprintln!("=== STDOUT ===\n{}", stdout);
    eprintln!("=== STDERR ===\n{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.status.success(), "binary exited with failure");

    for n in ["10. Loops", "11. Conditionals", "12. Arrays", "renumber.xml"] {
        assert!(base.join(n).exists(), "expected {n}");
    }
    assert!(!base.join("08. Loops").exists());

    assert!(stdout.contains("Phase 1: Renaming to temporary names..."));
    assert!(stdout.contains("  10. Arrays -> TEMP_12. Arrays"));
    assert!(stdout.contains("  08. Loops -> TEMP_10. Loops"));
    assert!(stdout.contains("Phase 2: Renaming to final names..."));
    assert!(stdout.contains("  TEMP_10. Loops -> 10. Loops"));
    assert!(stdout.contains("Folder renumbering complete!"));

    // phase 1 runs high to low
    let arrays = stdout.find("10. Arrays -> TEMP_12").unwrap();
    let loops = stdout.find("08. Loops -> TEMP_10").unwrap();
    assert!(arrays < loops);
}

#[test]
fn zero_args_without_config_applies_builtin_map() {
    let td = tempdir().unwrap();
    let base = td.path();
    fs::create_dir(base.join("30. Symbols")).unwrap();
    fs::create_dir(base.join("33. Types")).unwrap();
    fs::create_dir(base.join("01. Overview")).unwrap();

    let me = cargo::cargo_bin!("folder_renumber");
    let out = Command::new(me)
        .current_dir(base)
        .env_remove("FOLDER_RENUMBER_CONFIG")
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    assert!(base.join("08. Symbols").is_dir());
    assert!(base.join("09. Types").is_dir());
    assert!(base.join("01. Overview").is_dir());
}

#[test]
fn explicit_base_dir_and_dry_run() {
    let td = tempdir().unwrap();
    let course = td.path().join("course");
    fs::create_dir_all(course.join("01. A")).unwrap();
    fs::create_dir_all(course.join("02. B")).unwrap();
    fs::write(
        course.join("renumber.xml"),
        r#"<config><map><entry from="1" to="2"/><entry from="2" to="1"/></map></config>"#,
    )
    .unwrap();

    let me = cargo::cargo_bin!("folder_renumber");
    let out = Command::new(me)
        .current_dir(td.path())
        .env_remove("FOLDER_RENUMBER_CONFIG")
        .arg(&course)
        .arg("--dry-run")
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("dry-run: 02. B -> TEMP_01. B"), "stdout: {stdout}");
    assert!(course.join("01. A").is_dir());
    assert!(course.join("02. B").is_dir());
}

#[test]
fn rejected_plan_exits_nonzero_and_leaves_tree() {
    let td = tempdir().unwrap();
    let base = td.path();
    fs::create_dir(base.join("01. A")).unwrap();
    fs::create_dir(base.join("02. B")).unwrap();
    fs::write(
        base.join("renumber.xml"),
        r#"<config><map><entry from="1" to="2"/></map></config>"#,
    )
    .unwrap();

    let me = cargo::cargo_bin!("folder_renumber");
    let out = Command::new(me)
        .current_dir(base)
        .env_remove("FOLDER_RENUMBER_CONFIG")
        .output()
        .expect("spawn binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("already held"), "stderr: {stderr}");
    assert!(stderr.contains("target_occupied"), "stderr: {stderr}");
    assert!(base.join("01. A").is_dir());
    assert!(base.join("02. B").is_dir());
}
