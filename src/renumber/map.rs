//! Renumbering map: old ordinal -> new ordinal.
//!
//! Keys and values may overlap freely (that is what the staging pass is for),
//! but the map must be injective: two folders can never be sent to the same
//! ordinal.

use anyhow::Result;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::errors::RenumberError;

/// Table shipped with the binary: reorders the ECMAScript folders to follow
/// the mind map structure.
const BUILTIN_PAIRS: &[(u32, u32)] = &[
    // specialized and reference
    (26, 33), (25, 32), (24, 31),
    // advanced features (proxy)
    (29, 30),
    // advanced features
    (23, 29), (22, 28), (21, 27),
    // paradigms
    (20, 26), (19, 25),
    // advanced language features
    (32, 24), (31, 23), (28, 22), (27, 21),
    (18, 20), (17, 19), (16, 18),
    // functions and execution
    (15, 17), (14, 16), (13, 15),
    // operations
    (12, 14), (11, 13), (10, 12), (9, 11), (8, 10),
    // data and types
    (33, 9), (30, 8),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenumberMap {
    moves: BTreeMap<u32, u32>,
}

impl RenumberMap {
    /// Build from `(old, new)` pairs, rejecting repeated sources and shared targets.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut moves = BTreeMap::new();
        for (old, new) in pairs {
            match moves.entry(old) {
                Entry::Occupied(_) => return Err(RenumberError::DuplicateSource(old).into()),
                Entry::Vacant(v) => {
                    v.insert(new);
                }
            }
        }
        Self::from_btree(moves)
    }

    /// Wrap an existing map after checking it is injective.
    pub fn from_btree(moves: BTreeMap<u32, u32>) -> Result<Self> {
        let mut seen: BTreeMap<u32, u32> = BTreeMap::new();
        for (&old, &new) in &moves {
            if let Some(&first) = seen.get(&new) {
                return Err(RenumberError::DuplicateTarget {
                    first,
                    second: old,
                    target: new,
                }
                .into());
            }
            seen.insert(new, old);
        }
        Ok(Self { moves })
    }

    /// The compiled-in table used when no config file provides one.
    pub fn builtin() -> Self {
        let moves = BUILTIN_PAIRS.iter().copied().collect();
        Self { moves }
    }

    pub fn get(&self, old: u32) -> Option<u32> {
        self.moves.get(&old).copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Pairs in phase-1 order (descending old ordinal).
    pub fn descending(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.moves.iter().rev().map(|(&o, &n)| (o, n))
    }

    /// Pairs in ascending old ordinal.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.moves.iter().map(|(&o, &n)| (o, n))
    }
}
