//! Curated reference data: exact number-to-phrase overrides.
//!
//! The table is the highest-priority source of truth for numbers it covers;
//! it encodes irregular or attested forms the rule engine would not produce.
//! It is owned by the loading collaborator and injected into the engine,
//! which only ever reads it.

use std::collections::BTreeMap;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only mapping from numbers to their attested phrases.
///
/// Inserting an existing key replaces the earlier phrase: curated data is
/// amended by appending corrected rows, and the last row wins.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceTable {
    entries: BTreeMap<u64, Arc<str>>,
}

impl ReferenceTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the phrase for `number`.
    pub fn insert(&mut self, number: u64, phrase: impl Into<Arc<str>>) {
        self.entries.insert(number, phrase.into());
    }

    /// The attested phrase for `number`, if tabulated.
    #[must_use]
    pub fn get(&self, number: u64) -> Option<&str> {
        self.entries.get(&number).map(AsRef::as_ref)
    }

    /// Whether `number` is tabulated.
    #[must_use]
    pub fn contains(&self, number: u64) -> bool {
        self.entries.contains_key(&number)
    }

    /// Number of tabulated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in ascending numeric order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.entries.iter().map(|(n, phrase)| (*n, phrase.as_ref()))
    }
}

impl<S: Into<Arc<str>>> FromIterator<(u64, S)> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = (u64, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (number, phrase) in iter {
            table.insert(number, phrase);
        }
        table
    }
}

impl<S: Into<Arc<str>>> Extend<(u64, S)> for ReferenceTable {
    fn extend<I: IntoIterator<Item = (u64, S)>>(&mut self, iter: I) {
        for (number, phrase) in iter {
            self.insert(number, phrase);
        }
    }
}
