//! Folder name grammar: `<digits>. <label>`.
//!
//! Only one ASCII space separates the ordinal from the label; the label keeps
//! whatever follows verbatim (including further leading spaces).

use std::fmt;

/// Default marker for the phase-1 staging namespace.
pub const DEFAULT_STAGING_PREFIX: &str = "TEMP_";

/// Default zero-padding width for committed ordinals.
pub const DEFAULT_PAD_WIDTH: usize = 2;

/// A directory name split into its ordinal and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedName {
    pub ordinal: u32,
    pub label: String,
}

impl NumberedName {
    pub fn new(ordinal: u32, label: impl Into<String>) -> Self {
        Self {
            ordinal,
            label: label.into(),
        }
    }

    /// Parse `<digits>. <label>`. Returns None for anything else, including
    /// ordinals that overflow `u32` and empty labels.
    pub fn parse(name: &str) -> Option<Self> {
        let (digits, rest) = name.split_once('.')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let label = rest.strip_prefix(' ')?;
        if label.is_empty() {
            return None;
        }
        let ordinal = digits.parse::<u32>().ok()?;
        Some(Self::new(ordinal, label))
    }

    /// Final on-disk name with the ordinal zero-padded to `pad_width`.
    pub fn render(&self, pad_width: usize) -> String {
        format!("{:0width$}. {}", self.ordinal, self.label, width = pad_width)
    }

    /// Phase-1 name: the committed name behind the staging marker.
    pub fn staging(&self, prefix: &str, pad_width: usize) -> String {
        format!("{prefix}{}", self.render(pad_width))
    }

    /// Same label under a different ordinal.
    pub fn with_ordinal(&self, ordinal: u32) -> Self {
        Self::new(ordinal, self.label.clone())
    }
}

impl fmt::Display for NumberedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_PAD_WIDTH))
    }
}
