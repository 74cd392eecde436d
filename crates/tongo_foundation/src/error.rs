//! Error types for the Tongo system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use thiserror::Error;

use crate::component::Tier;

/// Convenience alias for results carrying a Tongo [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tongo operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input that the engine refuses to translate.
    #[error("invalid input: {reason}: {value}")]
    InvalidInput {
        /// The offending input value.
        value: i64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// A component's base value has no morpheme and is not decomposable.
    ///
    /// Defensive: unreachable for components produced by the decomposer,
    /// but raised rather than silently emitting an empty fragment.
    #[error("no morpheme for base {base} in {tier} position")]
    MorphemeNotFound {
        /// The base value that failed to resolve.
        base: u64,
        /// The tier in which resolution was attempted.
        tier: Tier,
    },

    /// A morpheme value was defined twice while building a table.
    #[error("duplicate morpheme for value {value}")]
    DuplicateMorpheme {
        /// The value defined more than once.
        value: u64,
    },

    /// A required anchor is absent from a morpheme table under construction.
    #[error("morpheme table is missing required anchor {value}")]
    MissingMorpheme {
        /// The absent anchor value.
        value: u64,
    },

    /// Reference data could not be loaded.
    ///
    /// Callers report this once and continue in rule-only mode; generation
    /// itself never depends on reference data being present.
    #[error("reference data unavailable: {path}: {message}")]
    ReferenceUnavailable {
        /// Path of the reference file that failed to load.
        path: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// A row of reference data did not match the `Number;Translation` format.
    #[error("malformed reference row at line {line}: {message}")]
    MalformedReferenceRow {
        /// 1-indexed line number of the offending row.
        line: usize,
        /// Description of what was wrong with the row.
        message: String,
    },

    /// Terminal input could not be read.
    #[error("input error: {0}")]
    Input(String),
}

impl Error {
    /// Creates an invalid-input error for a negative number.
    #[must_use]
    pub fn negative(value: i64) -> Self {
        Self::InvalidInput {
            value,
            reason: "negative number",
        }
    }

    /// Creates a morpheme-not-found error.
    #[must_use]
    pub fn morpheme_not_found(base: u64, tier: Tier) -> Self {
        Self::MorphemeNotFound { base, tier }
    }

    /// Creates a duplicate-morpheme error.
    #[must_use]
    pub fn duplicate_morpheme(value: u64) -> Self {
        Self::DuplicateMorpheme { value }
    }

    /// Creates a missing-morpheme error.
    #[must_use]
    pub fn missing_morpheme(value: u64) -> Self {
        Self::MissingMorpheme { value }
    }

    /// Creates a reference-unavailable error.
    #[must_use]
    pub fn reference_unavailable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReferenceUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed-reference-row error.
    #[must_use]
    pub fn malformed_row(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedReferenceRow {
            line,
            message: message.into(),
        }
    }
}
