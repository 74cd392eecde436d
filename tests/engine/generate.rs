//! Integration tests for end-to-end generation.
//!
//! The concrete scenarios from the system contract, plus reference
//! precedence and error propagation.

use tongo_engine::NumeralEngine;
use tongo_foundation::{Error, ReferenceTable, TextSource};

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn scenario_single_unit() {
    let engine = NumeralEngine::susu();
    assert_eq!(engine.generate(1).unwrap(), "kérén");
}

#[test]
fn scenario_teen_uses_the_connector() {
    let engine = NumeralEngine::susu();
    assert_eq!(engine.generate(11).unwrap(), "fuú nŭn kérén");
}

#[test]
fn scenario_twenty_is_bare() {
    let engine = NumeralEngine::susu();
    assert_eq!(engine.generate(20).unwrap(), "m̀ɔx̀ɔǵɛŋ");
}

#[test]
fn scenario_tens_former_compound() {
    let engine = NumeralEngine::susu();
    assert_eq!(engine.generate(35).unwrap(), "tòngó sàxán nŭn súlí");
}

#[test]
fn scenario_bare_hundred() {
    let engine = NumeralEngine::susu();
    assert_eq!(engine.generate(100).unwrap(), "k̀ɛḿɛ");
}

#[test]
fn scenario_four_components_uniform_connector() {
    let engine = NumeralEngine::susu();
    assert_eq!(
        engine.generate(1234).unwrap(),
        "wúlù nŭn k̀ɛḿɛ fírín nŭn tòngó sàxán nŭn náání"
    );
}

// =============================================================================
// Full Range Behavior
// =============================================================================

#[test]
fn twenties_and_teens_use_their_base_words() {
    let engine = NumeralEngine::susu();
    assert_eq!(engine.generate(15).unwrap(), "fuú nŭn súlí");
    assert_eq!(engine.generate(22).unwrap(), "m̀ɔx̀ɔǵɛŋ nŭn fírín");
    assert_eq!(engine.generate(99).unwrap(), "tòngó sólómánáání nŭn sólómánáání");
}

#[test]
fn hundreds_connect_their_remainders() {
    let engine = NumeralEngine::susu();
    assert_eq!(engine.generate(101).unwrap(), "k̀ɛḿɛ nŭn kérén");
    assert_eq!(engine.generate(110).unwrap(), "k̀ɛḿɛ nŭn fuú");
    assert_eq!(engine.generate(150).unwrap(), "k̀ɛḿɛ nŭn tòngó súlí");
    assert_eq!(engine.generate(200).unwrap(), "k̀ɛḿɛ fírín");
}

#[test]
fn thousands_connect_their_remainders() {
    let engine = NumeralEngine::susu();
    assert_eq!(engine.generate(1001).unwrap(), "wúlù nŭn kérén");
    assert_eq!(engine.generate(2000).unwrap(), "wúlù fírín");
    assert_eq!(
        engine.generate(2519).unwrap(),
        "wúlù fírín nŭn k̀ɛḿɛ súlí nŭn fuú nŭn sólómánáání"
    );
}

#[test]
fn large_multipliers_recurse() {
    let engine = NumeralEngine::susu();
    // 12 000: the thousands multiplier 12 is itself decomposed.
    assert_eq!(engine.generate(12_000).unwrap(), "wúlù fuú nŭn fírín");
    // One million: thousands multiplier 1000.
    assert_eq!(engine.generate(1_000_000).unwrap(), "wúlù wúlù");
}

#[test]
fn recursive_multiplier_equals_standalone_phrase() {
    let engine = NumeralEngine::susu();
    for multiplier in [12_u64, 35, 234, 999, 1000] {
        let standalone = engine.phrase(multiplier).unwrap();
        let compound = engine.generate(i64::try_from(multiplier * 1000).unwrap()).unwrap();
        assert_eq!(compound, format!("wúlù {standalone}"));
    }
}

// =============================================================================
// Zero and Invalid Input
// =============================================================================

#[test]
fn zero_is_the_dedicated_literal() {
    let engine = NumeralEngine::susu();
    assert_eq!(engine.generate(0).unwrap(), "sìfírí");
}

#[test]
fn negative_numbers_are_invalid_input() {
    let engine = NumeralEngine::susu();
    for n in [-1, -100, i64::MIN] {
        assert!(
            matches!(engine.generate(n), Err(Error::InvalidInput { .. })),
            "expected InvalidInput for {n}"
        );
    }
}

// =============================================================================
// Reference Precedence
// =============================================================================

#[test]
fn tabulated_numbers_return_the_tabulated_string() {
    let reference: ReferenceTable = [
        (7_u64, "sólómá"),
        (11, "fuú nŭn kérén"),
        (1_000_000, "mìlíɔ̃"),
    ]
    .into_iter()
    .collect();
    let engine = NumeralEngine::susu().with_reference(reference);

    assert_eq!(engine.generate(7).unwrap(), "sólómá");
    assert_eq!(engine.generate(11).unwrap(), "fuú nŭn kérén");
    assert_eq!(engine.generate(1_000_000).unwrap(), "mìlíɔ̃");
}

#[test]
fn untabulated_numbers_fall_back_to_rules() {
    let reference: ReferenceTable = [(7_u64, "sólómá")].into_iter().collect();
    let engine = NumeralEngine::susu().with_reference(reference);
    assert_eq!(engine.generate(17).unwrap(), "fuú nŭn sólófèré");
}

#[test]
fn reference_hit_does_not_blend_into_compounds() {
    // 17 contains 7 as a unit; the reference override for 7 must not leak
    // into the rule-composed phrase for 17.
    let reference: ReferenceTable = [(7_u64, "sólómá")].into_iter().collect();
    let engine = NumeralEngine::susu().with_reference(reference);
    let phrase = engine.generate(17).unwrap();
    assert!(!phrase.contains("sólómá"));
}

#[test]
fn rendering_source_tracks_the_path() {
    let reference: ReferenceTable = [(7_u64, "sólómá")].into_iter().collect();
    let engine = NumeralEngine::susu().with_reference(reference);
    assert_eq!(engine.rendering(7).unwrap().source, TextSource::Reference);
    assert_eq!(engine.rendering(8).unwrap().source, TextSource::Rules);
}
