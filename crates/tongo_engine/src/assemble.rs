//! Phrase assembly from rendered components.

use tongo_foundation::{MorphemeTable, RenderedComponent};

/// Joins rendered components into the final phrase.
///
/// The additive connector appears between every adjacent pair of components;
/// a single component is emitted bare. Spacing inside one component's own
/// text (scale word plus multiplier) is a plain space, never the connector.
#[must_use]
pub fn assemble(table: &MorphemeTable, components: &[RenderedComponent]) -> String {
    let mut out = String::new();
    for component in components {
        if component.text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
            out.push_str(table.connector());
            out.push(' ');
        }
        out.push_str(&component.text);
    }
    out
}
