//! Session state for the REPL and CLI.
//!
//! A session owns the engine and remembers where reference data was loaded
//! from. Loading failures leave the previous state untouched so the session
//! keeps working rule-only.

use std::path::{Path, PathBuf};

use tongo_engine::NumeralEngine;
use tongo_explain::{Explanation, explain};
use tongo_foundation::{ReferenceTable, Result};
use tongo_reference::{Evaluation, evaluate, load_reference};

/// Engine plus reference-data state for interactive use.
pub struct Session {
    engine: NumeralEngine,
    reference_path: Option<PathBuf>,
}

impl Session {
    /// Creates a session over the built-in Susu table, rule-only.
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(NumeralEngine::susu())
    }

    /// Creates a session over a caller-provided engine.
    #[must_use]
    pub const fn with_engine(engine: NumeralEngine) -> Self {
        Self {
            engine,
            reference_path: None,
        }
    }

    /// The underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &NumeralEngine {
        &self.engine
    }

    /// Where reference data was loaded from, if anywhere.
    #[must_use]
    pub fn reference_path(&self) -> Option<&Path> {
        self.reference_path.as_deref()
    }

    /// Number of reference entries currently injected.
    #[must_use]
    pub fn reference_len(&self) -> usize {
        self.engine.reference().map_or(0, ReferenceTable::len)
    }

    /// Loads reference data and injects it into the engine.
    ///
    /// Returns the number of entries loaded.
    ///
    /// # Errors
    ///
    /// Returns [`tongo_foundation::Error::ReferenceUnavailable`] on failure;
    /// the session keeps its previous engine and stays usable.
    pub fn load_reference(&mut self, path: &Path) -> Result<usize> {
        let table = load_reference(path)?;
        let len = table.len();
        let morphemes = self.engine.table().clone();
        self.engine = NumeralEngine::new(morphemes).with_reference(table);
        self.reference_path = Some(path.to_path_buf());
        Ok(len)
    }

    /// Translates one number.
    ///
    /// # Errors
    ///
    /// Propagates engine failures (negative input, unresolvable morphemes).
    pub fn translate(&self, n: i64) -> Result<String> {
        self.engine.generate(n)
    }

    /// Explains one number's construction.
    ///
    /// # Errors
    ///
    /// Propagates engine failures.
    pub fn explain(&self, n: i64) -> Result<Explanation> {
        explain(&self.engine, n)
    }

    /// Evaluates rule output against the loaded reference data.
    ///
    /// `None` when no reference data is loaded.
    #[must_use]
    pub fn evaluate(&self) -> Option<Evaluation> {
        self.engine
            .reference()
            .map(|reference| evaluate(&self.engine, reference))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
