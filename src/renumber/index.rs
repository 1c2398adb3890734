//! One-shot index of the numbered folders directly under a base directory.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

use crate::errors::RenumberError;

use super::name::NumberedName;

/// A numbered directory found during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDir {
    pub path: PathBuf,
    pub name: NumberedName,
}

/// Ordinal -> directories carrying that ordinal, in name order.
#[derive(Debug, Default)]
pub struct DirIndex {
    by_ordinal: BTreeMap<u32, Vec<IndexedDir>>,
}

impl DirIndex {
    /// Scan the immediate children of `base`. Files, symlinks and folders that
    /// don't follow `<N>. <label>` are ignored.
    pub fn scan(base: &Path) -> Result<Self> {
        let meta = std::fs::metadata(base).map_err(|_| RenumberError::BaseInvalid(base.to_path_buf()))?;
        if !meta.is_dir() {
            return Err(RenumberError::BaseInvalid(base.to_path_buf()).into());
        }

        let mut by_ordinal: BTreeMap<u32, Vec<IndexedDir>> = BTreeMap::new();
        let walker = WalkDir::new(base)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.with_context(|| format!("list directory '{}'", base.display()))?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(name) = NumberedName::parse(file_name) else {
                trace!(name = file_name, "skipping folder outside the naming pattern");
                continue;
            };
            by_ordinal.entry(name.ordinal).or_default().push(IndexedDir {
                path: entry.into_path(),
                name,
            });
        }
        Ok(Self { by_ordinal })
    }

    /// The single directory holding `ordinal`. Fails when more than one does.
    pub fn unique(&self, ordinal: u32) -> Result<Option<&IndexedDir>> {
        match self.by_ordinal.get(&ordinal).map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([only]) => Ok(Some(only)),
            Some([first, second, ..]) => Err(RenumberError::DuplicateOrdinal {
                ordinal,
                first: first.path.clone(),
                second: second.path.clone(),
            }
            .into()),
        }
    }

    /// Any directory holding `ordinal`.
    pub fn holders(&self, ordinal: u32) -> &[IndexedDir] {
        self.by_ordinal.get(&ordinal).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of indexed directories.
    pub fn len(&self) -> usize {
        self.by_ordinal.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ordinal.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn indexes_only_numbered_directories() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("01. Intro").create_dir_all().unwrap();
        dir.child("02. Types").create_dir_all().unwrap();
        dir.child("03. notes.txt").touch().unwrap();
        dir.child("misc").create_dir_all().unwrap();
        dir.child("01. Intro").child("05. Nested").create_dir_all().unwrap();

        let idx = DirIndex::scan(dir.path()).unwrap();
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.unique(1).unwrap().unwrap().name.label, "Intro");
        assert!(idx.unique(3).unwrap().is_none());
        assert!(idx.unique(5).unwrap().is_none(), "scan must not recurse");
    }

    #[test]
    fn shared_ordinal_is_ambiguous() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("4. Alpha").create_dir_all().unwrap();
        dir.child("04. Beta").create_dir_all().unwrap();

        let idx = DirIndex::scan(dir.path()).unwrap();
        assert_eq!(idx.holders(4).len(), 2);
        let err = idx.unique(4).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RenumberError>(),
            Some(RenumberError::DuplicateOrdinal { ordinal: 4, .. })
        ));
    }

    #[test]
    fn missing_base_is_invalid() {
        let dir = assert_fs::TempDir::new().unwrap();
        let err = DirIndex::scan(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RenumberError>(),
            Some(RenumberError::BaseInvalid(_))
        ));
    }
}
