//! Integration tests for rule-vs-reference evaluation.

use tongo_engine::NumeralEngine;
use tongo_foundation::ReferenceTable;
use tongo_reference::{evaluate, parse_reference};

/// A curated extract that agrees with the composition rules everywhere.
const AGREEING_EXTRACT: &str = "\
Nombre;Traduction_soussou
1;kérén
2;fírín
10;fuú
11;fuú nŭn kérén
20;m̀ɔx̀ɔǵɛŋ
21;m̀ɔx̀ɔǵɛŋ nŭn kérén
30;tòngó sàxán
35;tòngó sàxán nŭn súlí
100;k̀ɛḿɛ
200;k̀ɛḿɛ fírín
1000;wúlù
1234;wúlù nŭn k̀ɛḿɛ fírín nŭn tòngó sàxán nŭn náání
";

#[test]
fn rules_reproduce_the_curated_extract() {
    let engine = NumeralEngine::susu();
    let reference = parse_reference(AGREEING_EXTRACT).unwrap();
    let evaluation = evaluate(&engine, &reference);
    assert_eq!(evaluation.total, 12);
    assert_eq!(
        evaluation.matches, 12,
        "mismatches: {:?}",
        evaluation.mismatches
    );
    assert!((evaluation.accuracy() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn irregular_attested_forms_show_up_as_mismatches() {
    let engine = NumeralEngine::susu();
    // An alternate corpus form for 7 that the rules do not produce.
    let reference: ReferenceTable = [(7_u64, "sólómá")].into_iter().collect();
    let evaluation = evaluate(&engine, &reference);
    assert_eq!(evaluation.matches, 0);
    assert_eq!(evaluation.mismatches[0].generated, "sólófèré");
}

#[test]
fn mismatches_come_out_in_numeric_order() {
    let engine = NumeralEngine::susu();
    let reference: ReferenceTable = [
        (300_u64, "divergent-a"),
        (4_u64, "divergent-b"),
        (52_u64, "divergent-c"),
    ]
    .into_iter()
    .collect();
    let evaluation = evaluate(&engine, &reference);
    let numbers: Vec<u64> = evaluation.mismatches.iter().map(|m| m.number).collect();
    assert_eq!(numbers, vec![4, 52, 300]);
}
