//! Construction-step explanations derived from the engine's trace.

use serde::Serialize;

use tongo_engine::NumeralEngine;
use tongo_foundation::{RenderedComponent, Result, RuleId, TextSource, Tier};

use crate::rules::describe;

/// A complete explanation of how one number's written form is built.
///
/// Consumed by presentation layers (CLI, REPL, web); serializes to JSON via
/// [`crate::report::to_json`].
#[derive(Clone, Debug, Serialize)]
pub struct Explanation {
    /// The input number.
    pub number: u64,
    /// The translation the engine produced for it.
    pub translation: String,
    /// Which path produced the translation.
    pub source: TextSource,
    /// The rule decomposition trace, in decomposition order.
    pub components: Vec<RenderedComponent>,
    /// Ordered construction steps, one per component plus assembly.
    pub steps: Vec<String>,
    /// Rules applied, deduplicated in first-use order.
    pub rules_applied: Vec<RuleId>,
}

/// Explains how the engine builds the written form of `n`.
///
/// Derivative of the engine's own rendering: the translation shown here is
/// byte-identical to [`NumeralEngine::generate`] for the same input.
///
/// # Errors
///
/// Same failure modes as [`NumeralEngine::rendering`].
pub fn explain(engine: &NumeralEngine, n: i64) -> Result<Explanation> {
    let rendering = engine.rendering(n)?;

    if rendering.components.is_empty() {
        // Zero: the dedicated literal, no decomposition.
        let step = format!(
            "1. zero: 0 → \"{}\" [{}]",
            rendering.text,
            RuleId::ZeroLiteral
        );
        return Ok(Explanation {
            number: rendering.number,
            translation: rendering.text,
            source: rendering.source,
            components: Vec::new(),
            steps: vec![step],
            rules_applied: vec![RuleId::ZeroLiteral],
        });
    }

    let mut steps = Vec::with_capacity(rendering.components.len() + 2);
    for (index, component) in rendering.components.iter().enumerate() {
        steps.push(component_step(index + 1, component));
    }

    let compound = rendering.components.len() > 1;
    if compound {
        steps.push(format!(
            "{}. join the components with the connector \"{}\" [{}]",
            rendering.components.len() + 1,
            engine.table().connector(),
            RuleId::AdditiveComposition
        ));
    }

    match rendering.source {
        TextSource::Rules => steps.push(format!("assembled: \"{}\"", rendering.text)),
        TextSource::Reference => steps.push(format!(
            "reference override: attested phrase \"{}\" replaces the rule assembly",
            rendering.text
        )),
    }

    let mut rules_applied: Vec<RuleId> = Vec::new();
    for component in &rendering.components {
        if !rules_applied.contains(&component.rule) {
            rules_applied.push(component.rule);
        }
    }
    if compound {
        rules_applied.push(RuleId::AdditiveComposition);
    }

    Ok(Explanation {
        number: rendering.number,
        translation: rendering.text,
        source: rendering.source,
        components: rendering.components,
        steps,
        rules_applied,
    })
}

/// One numbered construction step for a component, naming its formula, its
/// resolved text, and the rule applied.
fn component_step(index: usize, component: &RenderedComponent) -> String {
    let formula = match component.tier {
        Tier::Unit | Tier::Twenty => component.value.to_string(),
        Tier::Ten if component.base == 10 => "10".to_string(),
        Tier::Ten => format!("{} × 10", component.base),
        Tier::Hundred if component.base == 1 => "100".to_string(),
        Tier::Hundred => format!("{} × 100", component.base),
        Tier::Thousand if component.base == 1 => "1000".to_string(),
        Tier::Thousand => format!("{} × 1000", component.base),
    };
    let gloss = describe(component.rule).name;
    format!(
        "{index}. {tier}: {formula} → \"{text}\" [{rule}: {gloss}]",
        tier = component.tier,
        text = component.text,
        rule = component.rule,
    )
}
