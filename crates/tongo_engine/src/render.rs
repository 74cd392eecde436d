//! Per-component morpheme resolution.
//!
//! The renderer is a pure function of a component and the morpheme table.
//! Multipliers beyond the single-digit range are resolved by recursing
//! through the full decompose-render-assemble pipeline; that recursion never
//! consults reference data, so a multiplier's sub-phrase is always identical
//! to rule-only generation of the multiplier alone.

use tongo_foundation::{
    Component, Error, MorphemeTable, RenderedComponent, Result, RuleId, Tier,
};

use crate::assemble::assemble;
use crate::decompose::decompose;

/// Resolves components against a morpheme table.
pub struct Renderer<'a> {
    table: &'a MorphemeTable,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer borrowing the given table.
    #[must_use]
    pub const fn new(table: &'a MorphemeTable) -> Self {
        Self { table }
    }

    /// Resolves one component's text and rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MorphemeNotFound`] for a base value with no morpheme
    /// that is not itself decomposable. Unreachable for components produced
    /// by [`decompose`], but malformed input is reported, never rendered as
    /// an empty fragment or bare digits.
    pub fn render(&self, component: &Component) -> Result<RenderedComponent> {
        let c = *component;
        let (text, rule) = match c.tier {
            Tier::Unit => (self.unit_text(c.base)?.to_string(), RuleId::UnitBase),
            Tier::Ten if c.base == 10 => {
                (self.anchor_text(10, Tier::Ten)?.to_string(), RuleId::TenFormation)
            }
            Tier::Ten if (3..=9).contains(&c.base) => {
                let unit = self.unit_text(c.base)?;
                (
                    format!("{} {unit}", self.table.tens_former()),
                    RuleId::TenFormation,
                )
            }
            Tier::Ten => return Err(Error::morpheme_not_found(c.base, Tier::Ten)),
            Tier::Twenty => {
                (self.anchor_text(20, Tier::Twenty)?.to_string(), RuleId::TenFormation)
            }
            Tier::Hundred => {
                let scale = self.anchor_text(100, Tier::Hundred)?;
                if c.base == 1 {
                    (scale.to_string(), RuleId::HundredFormation)
                } else {
                    let multiplier = self.multiplier_text(c.base, Tier::Hundred)?;
                    (format!("{scale} {multiplier}"), RuleId::HundredFormation)
                }
            }
            Tier::Thousand => {
                let scale = self.anchor_text(1000, Tier::Thousand)?;
                if c.base == 1 {
                    (scale.to_string(), RuleId::ThousandFormation)
                } else {
                    let multiplier = self.multiplier_text(c.base, Tier::Thousand)?;
                    (format!("{scale} {multiplier}"), RuleId::ThousandFormation)
                }
            }
        };
        Ok(RenderedComponent::new(c, text, rule))
    }

    /// Resolves a whole component sequence in order.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Error::MorphemeNotFound`] encountered.
    pub fn render_all(&self, components: &[Component]) -> Result<Vec<RenderedComponent>> {
        components.iter().map(|c| self.render(c)).collect()
    }

    /// Rule-only generation: the full decompose-render-assemble pipeline.
    ///
    /// This is the recursion target for multi-digit multipliers and the
    /// fallback path of the engine when no reference phrase exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MorphemeNotFound`] for zero (not decomposable) or
    /// when a component fails to resolve.
    pub fn phrase(&self, n: u64) -> Result<String> {
        let components = decompose(n);
        if components.is_empty() {
            return Err(Error::morpheme_not_found(n, Tier::Unit));
        }
        let rendered = self.render_all(&components)?;
        Ok(assemble(self.table, &rendered))
    }

    fn unit_text(&self, base: u64) -> Result<&'a str> {
        if (1..=9).contains(&base) {
            self.table
                .text(base)
                .ok_or_else(|| Error::morpheme_not_found(base, Tier::Unit))
        } else {
            Err(Error::morpheme_not_found(base, Tier::Unit))
        }
    }

    fn anchor_text(&self, value: u64, tier: Tier) -> Result<&'a str> {
        self.table
            .text(value)
            .ok_or_else(|| Error::morpheme_not_found(value, tier))
    }

    fn multiplier_text(&self, base: u64, tier: Tier) -> Result<String> {
        if base <= 9 {
            match self.unit_text(base) {
                Ok(text) => Ok(text.to_string()),
                Err(_) => Err(Error::morpheme_not_found(base, tier)),
            }
        } else {
            self.phrase(base)
        }
    }
}
