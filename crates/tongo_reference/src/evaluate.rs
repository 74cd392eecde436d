//! Accuracy evaluation of rule output against curated data.
//!
//! Compares what the rule pipeline produces for every tabulated number with
//! the attested phrase. Used to validate composition policy choices (most
//! notably the connector placement) against authoritative data.

use tongo_engine::NumeralEngine;
use tongo_foundation::ReferenceTable;

/// One disagreement between rule output and curated data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// The number both sides describe.
    pub number: u64,
    /// The attested phrase.
    pub expected: String,
    /// What the rules produced (or the rendering error, formatted).
    pub generated: String,
}

/// Summary of an evaluation run.
#[derive(Clone, Debug, Default)]
pub struct Evaluation {
    /// Entries compared.
    pub total: usize,
    /// Entries where rule output matched byte-for-byte.
    pub matches: usize,
    /// The disagreements, in ascending numeric order.
    pub mismatches: Vec<Mismatch>,
}

impl Evaluation {
    /// Fraction of entries matched, in `[0, 1]`. Zero for an empty run.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matches as f64 / self.total as f64
        }
    }
}

/// Compares rule-only generation against every entry of `reference`.
///
/// The engine's own reference table is deliberately bypassed: the point is
/// to measure the rules, and with the short-circuit in play every tabulated
/// entry would trivially match.
#[must_use]
pub fn evaluate(engine: &NumeralEngine, reference: &ReferenceTable) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for (number, expected) in reference.iter() {
        evaluation.total += 1;
        let generated = match engine.phrase(number) {
            Ok(phrase) => phrase,
            Err(e) => format!("<error: {e}>"),
        };
        if generated == expected {
            evaluation.matches += 1;
        } else {
            evaluation.mismatches.push(Mismatch {
                number,
                expected: expected.to_string(),
                generated,
            });
        }
    }

    evaluation
}
