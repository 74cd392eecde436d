//! Positional components and the morphological rules that resolve them.
//!
//! Decomposing a number yields a sequence of [`Component`]s in strictly
//! decreasing tier rank; rendering attaches the resolved text and the
//! [`RuleId`] that produced it, yielding [`RenderedComponent`]s.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Tier
// =============================================================================

/// The magnitude class of a component.
///
/// `Ten` and `Twenty` share a rank: both occupy the tens position, and a
/// decomposition contains at most one of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tier {
    /// Units position, base 1-9.
    Unit,
    /// Tens position: the base word for 10, or a tens-former multiple.
    Ten,
    /// The dedicated base-20 lexical form.
    Twenty,
    /// Hundreds position, classifier plus multiplier.
    Hundred,
    /// Thousands position, classifier plus (possibly recursive) multiplier.
    Thousand,
}

impl Tier {
    /// Rank used for the magnitude-ordering invariant.
    ///
    /// Components of a decomposition appear in strictly decreasing rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Unit => 0,
            Self::Ten | Self::Twenty => 1,
            Self::Hundred => 2,
            Self::Thousand => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unit => "unit",
            Self::Ten => "ten",
            Self::Twenty => "twenty",
            Self::Hundred => "hundred",
            Self::Thousand => "thousand",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// Rule Identifiers
// =============================================================================

/// Identifier of a morphological rule, attached to rendered output for
/// traceability.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RuleId {
    /// Zero is the dedicated literal, never a decomposition.
    ZeroLiteral,
    /// A base lexical form for 1-9.
    UnitBase,
    /// Formation of the tens position (10, 20, tens-former multiples).
    TenFormation,
    /// Classifier-plus-multiplier formation for hundreds.
    HundredFormation,
    /// Classifier-plus-multiplier formation for thousands.
    ThousandFormation,
    /// Joining of components with the additive connector.
    AdditiveComposition,
}

impl RuleId {
    /// Stable identifier string, used in explanations and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZeroLiteral => "ZERO_LITERAL",
            Self::UnitBase => "UNIT_BASE",
            Self::TenFormation => "TEN_FORMATION",
            Self::HundredFormation => "HUNDRED_FORMATION",
            Self::ThousandFormation => "THOUSAND_FORMATION",
            Self::AdditiveComposition => "ADDITIVE_COMPOSITION",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Component
// =============================================================================

/// One positional component of a decomposed number, before rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Component {
    /// Absolute numeric contribution (e.g. 300 for hundreds with base 3).
    pub value: u64,
    /// The multiplier or magnitude value used for morpheme lookup.
    pub base: u64,
    /// The magnitude class of this component.
    pub tier: Tier,
}

impl Component {
    /// Creates a component from raw parts.
    #[must_use]
    pub const fn new(value: u64, base: u64, tier: Tier) -> Self {
        Self { value, base, tier }
    }

    /// A unit component for a digit 1-9.
    #[must_use]
    pub const fn unit(digit: u64) -> Self {
        Self::new(digit, digit, Tier::Unit)
    }

    /// The base lexical word for 10.
    #[must_use]
    pub const fn ten() -> Self {
        Self::new(10, 10, Tier::Ten)
    }

    /// A tens-former multiple: multiplier 3-9 contributing `multiplier * 10`.
    #[must_use]
    pub const fn tens(multiplier: u64) -> Self {
        Self::new(multiplier * 10, multiplier, Tier::Ten)
    }

    /// The dedicated base-20 component.
    #[must_use]
    pub const fn twenty() -> Self {
        Self::new(20, 20, Tier::Twenty)
    }

    /// A hundreds component contributing `multiplier * 100`.
    #[must_use]
    pub const fn hundred(multiplier: u64) -> Self {
        Self::new(multiplier * 100, multiplier, Tier::Hundred)
    }

    /// A thousands component contributing `multiplier * 1000`.
    #[must_use]
    pub const fn thousand(multiplier: u64) -> Self {
        Self::new(multiplier * 1000, multiplier, Tier::Thousand)
    }
}

// =============================================================================
// Text Source
// =============================================================================

/// Which path produced the final text of a rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextSource {
    /// The curated reference table supplied an exact phrase.
    Reference,
    /// The rule engine composed the phrase.
    Rules,
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => write!(f, "reference"),
            Self::Rules => write!(f, "rules"),
        }
    }
}

// =============================================================================
// Rendered Component
// =============================================================================

/// A component with its resolved text and the rule that resolved it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderedComponent {
    /// Absolute numeric contribution.
    pub value: u64,
    /// The base value that was looked up.
    pub base: u64,
    /// The magnitude class.
    pub tier: Tier,
    /// The resolved lexical fragment or composed sub-phrase.
    pub text: String,
    /// The rule that produced `text`.
    pub rule: RuleId,
}

impl RenderedComponent {
    /// Creates a rendered component from a component and its resolution.
    #[must_use]
    pub fn new(component: Component, text: impl Into<String>, rule: RuleId) -> Self {
        Self {
            value: component.value,
            base: component.base,
            tier: component.tier,
            text: text.into(),
            rule,
        }
    }
}
