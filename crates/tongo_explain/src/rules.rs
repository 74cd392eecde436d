//! The morphological rule catalog.
//!
//! One static description per [`RuleId`], consumed by the step generator and
//! by presentation layers.

use tongo_foundation::RuleId;

/// A rule's presentation-facing description.
#[derive(Clone, Copy, Debug)]
pub struct RuleDescription {
    /// The rule this describes.
    pub id: RuleId,
    /// Short human-readable name.
    pub name: &'static str,
    /// Schematic composition pattern.
    pub pattern: &'static str,
    /// Plain-language gloss of what the rule does.
    pub gloss: &'static str,
}

/// All rule descriptions, in rule-precedence order.
pub const CATALOG: &[RuleDescription] = &[
    RuleDescription {
        id: RuleId::ZeroLiteral,
        name: "Zero Literal",
        pattern: "[zero-word]",
        gloss: "Zero is a dedicated lexical form, never a composition.",
    },
    RuleDescription {
        id: RuleId::UnitBase,
        name: "Base Units (1-9)",
        pattern: "[root]",
        gloss: "Each number from 1 to 9 is a unique root morpheme.",
    },
    RuleDescription {
        id: RuleId::TenFormation,
        name: "Tens Formation",
        pattern: "[ten-word] | [twenty-word] | [tens-former] [unit]",
        gloss: "10 and 20 are base words; 30-90 combine the tens-former with a unit.",
    },
    RuleDescription {
        id: RuleId::HundredFormation,
        name: "Hundreds Formation",
        pattern: "[hundred-classifier] [multiplier?]",
        gloss: "100 is the bare classifier; multiples append their multiplier.",
    },
    RuleDescription {
        id: RuleId::ThousandFormation,
        name: "Thousands Formation",
        pattern: "[thousand-classifier] [multiplier?]",
        gloss: "1000 is the bare classifier; multipliers of 10 or more recurse \
                through full decomposition.",
    },
    RuleDescription {
        id: RuleId::AdditiveComposition,
        name: "Additive Composition",
        pattern: "[component] [connector] [component]",
        gloss: "Components of a compound number join with the additive connector.",
    },
];

/// Looks up the description for a rule.
#[must_use]
pub fn describe(id: RuleId) -> &'static RuleDescription {
    CATALOG
        .iter()
        .find(|d| d.id == id)
        .expect("catalog covers every rule")
}
