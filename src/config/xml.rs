//! XML configuration support.
//! - Loads settings and the renumbering map from renumber.xml (quick_xml).
//! - Writes a template holding the built-in map on request.
//!
//! Notes:
//! - Unknown XML fields are rejected to surface misconfigurations early.
//! - A relative `base_dir` is resolved against the config file's directory;
//!   without one, the config file's own directory is the base.

use anyhow::{Context, Result, anyhow};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::path_has_symlink_ancestor;
use super::types::{Config, LogLevel};
use crate::renumber::map::RenumberMap;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "base_dir")]
    base_dir: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "staging_prefix")]
    staging_prefix: Option<String>,
    #[serde(rename = "pad_width", default, deserialize_with = "de_usize_trimmed_opt")]
    pad_width: Option<usize>,
    #[serde(rename = "map")]
    map: Option<XmlMap>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlMap {
    #[serde(rename = "entry", default)]
    entries: Vec<XmlEntry>,
}

/// `<entry from="8" to="10"/>`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlEntry {
    #[serde(rename = "@from")]
    from: u32,
    #[serde(rename = "@to")]
    to: u32,
}

// Custom deserializer that trims surrounding whitespace for optional usize
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<usize>().map(Some).map_err(serde::de::Error::custom),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Directory holding `path` ("." for a bare file name).
fn config_dir_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig, cfg_dir: &Path) -> Result<Config> {
    let mut cfg = Config::default();

    cfg.base_dir = match non_empty(parsed.base_dir.as_deref()) {
        Some(s) => cfg_dir.join(s),
        None => cfg_dir.to_path_buf(),
    };
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(|s| cfg_dir.join(s));

    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = LogLevel::parse(s).ok_or_else(|| anyhow!("invalid log_level '{s}'"))?;
    }
    if let Some(s) = non_empty(parsed.staging_prefix.as_deref()) {
        cfg.staging_prefix = s.to_string();
    }
    if let Some(w) = parsed.pad_width {
        cfg.pad_width = w;
    }
    if let Some(m) = parsed.map {
        cfg.map = RenumberMap::from_pairs(m.entries.into_iter().map(|e| (e.from, e.to)))
            .context("invalid <map>")?;
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed, &config_dir_of(path))
        .with_context(|| format!("load config xml '{}'", path.display()))
}

/// Render a config document carrying `map`.
pub fn render_template(map: &RenumberMap) -> String {
    let mut doc = String::from(
        "<!--\n  folder_renumber configuration (XML)\n\n  Fields:\n    base_dir        -> folder whose children get renumbered (relative to this file; default: this file's folder)\n    log_level       -> quiet | normal | info | debug\n    log_file        -> path to log file (optional)\n    staging_prefix  -> marker for temporary names (default TEMP_)\n    pad_width       -> zero-padding of final ordinals (default 2)\n    map/entry       -> from = old ordinal, to = new ordinal\n\n  CLI flags override XML values.\n-->\n<config>\n  <log_level>normal</log_level>\n  <map>\n",
    );
    for (from, to) in map.descending() {
        let _ = writeln!(doc, "    <entry from=\"{from}\" to=\"{to}\"/>");
    }
    doc.push_str("  </map>\n</config>\n");
    doc
}

/// Write a template config with `map` to `path`. Never overwrites an existing file.
pub fn create_template_config(path: &Path, map: &RenumberMap) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        return Err(anyhow!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        ));
    }

    let mut f = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("create config '{}'", path.display()))?;
    f.write_all(render_template(map).as_bytes())
        .with_context(|| format!("write config '{}'", path.display()))?;
    f.sync_all()?;

    info!("Created template config at {}", path.display());
    Ok(())
}
