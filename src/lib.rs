//! Core library for `folder_renumber`.
//!
//! Renumbers the `<N>. <label>` folders directly under a base directory
//! according to an old -> new ordinal map, staging every moved folder under a
//! temporary name first so no rename ever lands on an occupied name.
//!
//! The binary is a thin shell over [`renumber::renumber_with_config`]: load a
//! [`Config`] (XML and/or CLI), then hand it over explicitly.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;
pub mod renumber;

pub use config::{
    CONFIG_ENV, CONFIG_FILE_NAME, Config, LogLevel, config_path_in, create_template_config,
    default_log_path, load_config_from_xml_path, path_has_symlink_ancestor, resolve_config_path,
    validate_and_normalize,
};
pub use errors::RenumberError;
pub use renumber::{
    ConsoleProgress, NumberedName, PlanOptions, Progress, RenumberMap, RenumberPlan, RenumberReport,
    renumber, renumber_with_config,
};

/// Convenience re-exports for callers.
pub mod prelude {
    pub use crate::config::{Config, LogLevel};
    pub use crate::errors::RenumberError as Error;
    pub use crate::renumber::{
        ConsoleProgress, PlanOptions, Progress, RenumberMap, RenumberReport, renumber,
        renumber_with_config,
    };
    pub type RResult<T> = anyhow::Result<T>;
}
