//! The morpheme inventory.
//!
//! A [`MorphemeTable`] maps canonical magnitude anchors (1-9, 10, 20, 100,
//! 1000) to their base lexical forms, and carries the three functional
//! morphemes used by composition: the additive connector, the tens-former,
//! and the zero literal. Tables are immutable once built; construction goes
//! through a validating [`MorphemeTableBuilder`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// Morpheme
// =============================================================================

/// Classification of a number morpheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MorphemeKind {
    /// A base lexical number (1-9, 10, 20).
    Root,
    /// A scale word that combines with a multiplier (100, 1000).
    Classifier,
}

impl fmt::Display for MorphemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Classifier => write!(f, "classifier"),
        }
    }
}

/// A single lexical form with its classification.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Morpheme {
    text: Arc<str>,
    kind: MorphemeKind,
}

impl Morpheme {
    /// The lexical form, exactly as stored (combining diacritics included).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this morpheme is a root or a classifier.
    #[must_use]
    pub const fn kind(&self) -> MorphemeKind {
        self.kind
    }
}

// =============================================================================
// Morpheme Table
// =============================================================================

/// Immutable mapping from canonical values to morphemes, plus the functional
/// morphemes used during assembly.
///
/// Byte-exact reproduction of the stored text is part of the contract:
/// generated phrases must round-trip against reference data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MorphemeTable {
    entries: BTreeMap<u64, Morpheme>,
    connector: Arc<str>,
    tens_former: Arc<str>,
    zero: Arc<str>,
}

impl MorphemeTable {
    /// Canonical anchors every table must define.
    pub const REQUIRED_ANCHORS: &'static [u64] =
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 20, 100, 1000];

    /// Starts building a table from its functional morphemes.
    #[must_use]
    pub fn builder(
        connector: impl Into<Arc<str>>,
        tens_former: impl Into<Arc<str>>,
        zero: impl Into<Arc<str>>,
    ) -> MorphemeTableBuilder {
        MorphemeTableBuilder {
            entries: BTreeMap::new(),
            duplicates: Vec::new(),
            connector: connector.into(),
            tens_former: tens_former.into(),
            zero: zero.into(),
        }
    }

    /// The attested Susu inventory.
    ///
    /// Sources vary on 7-9 (`sólófèré` vs corpus-specific alternates); the
    /// reference table is the place to carry alternates, not this table.
    #[must_use]
    pub fn susu() -> Self {
        Self::builder("nŭn", "tòngó", "sìfírí")
            .root(1, "kérén")
            .root(2, "fírín")
            .root(3, "sàxán")
            .root(4, "náání")
            .root(5, "súlí")
            .root(6, "sénní")
            .root(7, "sólófèré")
            .root(8, "sólómásàxán")
            .root(9, "sólómánáání")
            .root(10, "fuú")
            .root(20, "m̀ɔx̀ɔǵɛŋ")
            .classifier(100, "k̀ɛḿɛ")
            .classifier(1000, "wúlù")
            .build()
            .expect("built-in Susu table is complete")
    }

    /// Looks up the morpheme for a canonical value.
    #[must_use]
    pub fn get(&self, value: u64) -> Option<&Morpheme> {
        self.entries.get(&value)
    }

    /// Looks up just the text for a canonical value.
    #[must_use]
    pub fn text(&self, value: u64) -> Option<&str> {
        self.entries.get(&value).map(Morpheme::text)
    }

    /// Whether the table defines a morpheme for `value`.
    #[must_use]
    pub fn contains(&self, value: u64) -> bool {
        self.entries.contains_key(&value)
    }

    /// The additive connector morpheme.
    #[must_use]
    pub fn connector(&self) -> &str {
        &self.connector
    }

    /// The tens-forming morpheme.
    #[must_use]
    pub fn tens_former(&self) -> &str {
        &self.tens_former
    }

    /// The dedicated zero literal.
    #[must_use]
    pub fn zero(&self) -> &str {
        &self.zero
    }

    /// Number of defined anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no anchors (only possible mid-construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates anchors in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Morpheme)> {
        self.entries.iter().map(|(value, m)| (*value, m))
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Validating builder for [`MorphemeTable`].
///
/// Rejects duplicate values and tables missing a required anchor. Extra
/// anchors beyond the required set are allowed (callers may extend the
/// inventory with corpus-specific scale words).
#[derive(Clone, Debug)]
pub struct MorphemeTableBuilder {
    entries: BTreeMap<u64, Morpheme>,
    duplicates: Vec<u64>,
    connector: Arc<str>,
    tens_former: Arc<str>,
    zero: Arc<str>,
}

impl MorphemeTableBuilder {
    /// Adds a root morpheme.
    #[must_use]
    pub fn root(self, value: u64, text: impl Into<Arc<str>>) -> Self {
        self.insert(value, text.into(), MorphemeKind::Root)
    }

    /// Adds a classifier morpheme.
    #[must_use]
    pub fn classifier(self, value: u64, text: impl Into<Arc<str>>) -> Self {
        self.insert(value, text.into(), MorphemeKind::Classifier)
    }

    fn insert(mut self, value: u64, text: Arc<str>, kind: MorphemeKind) -> Self {
        if self.entries.contains_key(&value) {
            self.duplicates.push(value);
        } else {
            self.entries.insert(value, Morpheme { text, kind });
        }
        self
    }

    /// Finalizes the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateMorpheme`] if a value was defined twice, or
    /// [`Error::MissingMorpheme`] if a required anchor is absent.
    pub fn build(self) -> Result<MorphemeTable> {
        if let Some(&value) = self.duplicates.first() {
            return Err(Error::duplicate_morpheme(value));
        }
        for &anchor in MorphemeTable::REQUIRED_ANCHORS {
            if !self.entries.contains_key(&anchor) {
                return Err(Error::missing_morpheme(anchor));
            }
        }
        Ok(MorphemeTable {
            entries: self.entries,
            connector: self.connector,
            tens_former: self.tens_former,
            zero: self.zero,
        })
    }
}
