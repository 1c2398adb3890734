//! Typed error definitions for folder_renumber.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenumberError {
    #[error("Base directory missing or not a directory: {0}")]
    BaseInvalid(PathBuf),

    #[error("Ordinal {ordinal} is shared by '{first}' and '{second}'; refusing to guess which to rename")]
    DuplicateOrdinal {
        ordinal: u32,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Ordinals {first} and {second} both map to {target}")]
    DuplicateTarget { first: u32, second: u32, target: u32 },

    #[error("Ordinal {0} appears more than once as a source in the map")]
    DuplicateSource(u32),

    #[error("Target ordinal {ordinal} is already held by '{holder}', which is not being renumbered")]
    TargetOccupied { ordinal: u32, holder: PathBuf },

    #[error("Staging name already exists: {0}")]
    StagingOccupied(PathBuf),

    #[error("Rename target already exists: {0}")]
    TargetExists(PathBuf),

    #[error("Invalid naming options: {0}")]
    InvalidNaming(String),
}

impl RenumberError {
    /// Stable numeric code for logs and scripting.
    pub fn code(&self) -> u16 {
        match self {
            RenumberError::BaseInvalid(_) => 10,
            RenumberError::DuplicateOrdinal { .. } => 20,
            RenumberError::DuplicateTarget { .. } => 21,
            RenumberError::DuplicateSource(_) => 22,
            RenumberError::TargetOccupied { .. } => 30,
            RenumberError::StagingOccupied(_) => 31,
            RenumberError::TargetExists(_) => 32,
            RenumberError::InvalidNaming(_) => 40,
        }
    }

    /// Short machine-friendly kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            RenumberError::BaseInvalid(_) => "base_invalid",
            RenumberError::DuplicateOrdinal { .. } => "duplicate_ordinal",
            RenumberError::DuplicateTarget { .. } => "duplicate_target",
            RenumberError::DuplicateSource(_) => "duplicate_source",
            RenumberError::TargetOccupied { .. } => "target_occupied",
            RenumberError::StagingOccupied(_) => "staging_occupied",
            RenumberError::TargetExists(_) => "target_exists",
            RenumberError::InvalidNaming(_) => "invalid_naming",
        }
    }
}
