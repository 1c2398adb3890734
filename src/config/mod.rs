//! Config module.
//! Provides configuration types, path helpers, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{config_path_in, default_log_path, path_has_symlink_ancestor, resolve_config_path};
pub use types::{Config, LogLevel};
pub use crate::renumber::plan::MAX_PAD_WIDTH;
pub use validate::validate_and_normalize;
pub use xml::{create_template_config, load_config_from_xml_path, render_template};

/// File name looked up inside the base directory.
pub const CONFIG_FILE_NAME: &str = "renumber.xml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FOLDER_RENUMBER_CONFIG";
