//! The generation engine.
//!
//! [`NumeralEngine`] owns the injected morpheme table and the optional
//! reference table, and exposes the generation contract: reference lookup
//! short-circuits to the tabulated phrase; everything else is composed by
//! the rule pipeline. The engine is immutable after construction, so
//! concurrent calls need no coordination.

use tongo_foundation::{
    Error, MorphemeTable, ReferenceTable, RenderedComponent, Result, TextSource,
};

use crate::decompose::decompose;
use crate::render::Renderer;

// =============================================================================
// Rendering
// =============================================================================

/// The structured result of one generation call.
///
/// Constructed fresh per call and never cached; a reference-table hit is a
/// cheap read, not a cache write.
#[derive(Clone, Debug)]
pub struct Rendering {
    /// The input number.
    pub number: u64,
    /// The assembled phrase (or tabulated phrase on a reference hit).
    pub text: String,
    /// Which path produced `text`.
    pub source: TextSource,
    /// The rule decomposition trace. Empty exactly for zero.
    pub components: Vec<RenderedComponent>,
}

// =============================================================================
// Numeral Engine
// =============================================================================

/// Generation engine holding the read-only tables.
///
/// Construct with an explicit [`MorphemeTable`]; reference data is injected
/// with [`NumeralEngine::with_reference`]. There is no global state: two
/// engines with different tables coexist without interference.
pub struct NumeralEngine {
    table: MorphemeTable,
    reference: Option<ReferenceTable>,
}

impl NumeralEngine {
    /// Creates a rule-only engine over the given morpheme table.
    #[must_use]
    pub const fn new(table: MorphemeTable) -> Self {
        Self {
            table,
            reference: None,
        }
    }

    /// Convenience constructor: the built-in Susu table, rule-only.
    #[must_use]
    pub fn susu() -> Self {
        Self::new(MorphemeTable::susu())
    }

    /// Injects a reference table, consuming and returning the engine.
    #[must_use]
    pub fn with_reference(mut self, reference: ReferenceTable) -> Self {
        self.reference = Some(reference);
        self
    }

    /// The morpheme table this engine resolves against.
    #[must_use]
    pub const fn table(&self) -> &MorphemeTable {
        &self.table
    }

    /// The injected reference table, if any.
    #[must_use]
    pub const fn reference(&self) -> Option<&ReferenceTable> {
        self.reference.as_ref()
    }

    /// Translates `n` into its written Susu form.
    ///
    /// Precedence: zero literal, then exact reference match (returned
    /// verbatim), then rule composition. The two sources are never blended
    /// for a single number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for negative input, or
    /// [`Error::MorphemeNotFound`] if a component cannot resolve (defensive;
    /// unreachable with a complete table).
    pub fn generate(&self, n: i64) -> Result<String> {
        let value = Self::validate(n)?;
        if value == 0 {
            return Ok(self.table.zero().to_string());
        }
        if let Some(phrase) = self.lookup_reference(value) {
            return Ok(phrase.to_string());
        }
        Renderer::new(&self.table).phrase(value)
    }

    /// Rule-only generation, bypassing the reference table.
    ///
    /// This is the path multi-digit multipliers recurse through, exposed so
    /// callers (evaluation, tests) can compare rule output against curated
    /// data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MorphemeNotFound`] for zero or unresolvable
    /// components.
    pub fn phrase(&self, n: u64) -> Result<String> {
        Renderer::new(&self.table).phrase(n)
    }

    /// Produces the full structured result for `n`.
    ///
    /// The `text` follows the same precedence as [`NumeralEngine::generate`];
    /// `components` always carry the rule decomposition trace, which is what
    /// the explainer consumes.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NumeralEngine::generate`].
    pub fn rendering(&self, n: i64) -> Result<Rendering> {
        let value = Self::validate(n)?;
        if value == 0 {
            return Ok(Rendering {
                number: 0,
                text: self.table.zero().to_string(),
                source: TextSource::Rules,
                components: Vec::new(),
            });
        }

        let renderer = Renderer::new(&self.table);
        let components = renderer.render_all(&decompose(value))?;

        if let Some(phrase) = self.lookup_reference(value) {
            return Ok(Rendering {
                number: value,
                text: phrase.to_string(),
                source: TextSource::Reference,
                components,
            });
        }

        let text = crate::assemble::assemble(&self.table, &components);
        Ok(Rendering {
            number: value,
            text,
            source: TextSource::Rules,
            components,
        })
    }

    /// Translates a batch of numbers, pairing each input with its result.
    #[must_use]
    pub fn batch(&self, numbers: &[i64]) -> Vec<(i64, Result<String>)> {
        numbers.iter().map(|&n| (n, self.generate(n))).collect()
    }

    fn lookup_reference(&self, value: u64) -> Option<&str> {
        self.reference.as_ref().and_then(|r| r.get(value))
    }

    fn validate(n: i64) -> Result<u64> {
        u64::try_from(n).map_err(|_| Error::negative(n))
    }
}
