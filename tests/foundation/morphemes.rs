//! Integration tests for the morpheme inventory.
//!
//! The table is the single source of lexical truth: anchors, classification,
//! functional morphemes, and the validating builder.

use tongo_foundation::{Error, MorphemeKind, MorphemeTable};

// =============================================================================
// Built-in Susu Table
// =============================================================================

#[test]
fn susu_unit_forms_are_attested() {
    let table = MorphemeTable::susu();
    assert_eq!(table.text(1), Some("kérén"));
    assert_eq!(table.text(2), Some("fírín"));
    assert_eq!(table.text(3), Some("sàxán"));
    assert_eq!(table.text(4), Some("náání"));
    assert_eq!(table.text(5), Some("súlí"));
    assert_eq!(table.text(6), Some("sénní"));
    assert_eq!(table.text(7), Some("sólófèré"));
    assert_eq!(table.text(8), Some("sólómásàxán"));
    assert_eq!(table.text(9), Some("sólómánáání"));
}

#[test]
fn susu_anchor_forms_are_attested() {
    let table = MorphemeTable::susu();
    assert_eq!(table.text(10), Some("fuú"));
    assert_eq!(table.text(20), Some("m̀ɔx̀ɔǵɛŋ"));
    assert_eq!(table.text(100), Some("k̀ɛḿɛ"));
    assert_eq!(table.text(1000), Some("wúlù"));
}

#[test]
fn functional_morphemes_are_fixed() {
    let table = MorphemeTable::susu();
    assert_eq!(table.connector(), "nŭn");
    assert_eq!(table.tens_former(), "tòngó");
    assert_eq!(table.zero(), "sìfírí");
}

#[test]
fn scale_words_are_classifiers_and_bases_are_roots() {
    let table = MorphemeTable::susu();
    for (value, morpheme) in table.iter() {
        let expected = if value >= 100 {
            MorphemeKind::Classifier
        } else {
            MorphemeKind::Root
        };
        assert_eq!(morpheme.kind(), expected, "wrong kind for {value}");
    }
}

#[test]
fn gaps_are_misses_not_defaults() {
    let table = MorphemeTable::susu();
    assert_eq!(table.text(11), None);
    assert_eq!(table.text(30), None);
    assert_eq!(table.text(200), None);
    assert_eq!(table.text(1_000_000), None);
}

// =============================================================================
// Builder Validation
// =============================================================================

#[test]
fn builder_reports_the_duplicate_value() {
    let result = MorphemeTable::builder("nŭn", "tòngó", "sìfírí")
        .root(5, "súlí")
        .root(5, "súlí")
        .build();
    assert!(matches!(result, Err(Error::DuplicateMorpheme { value: 5 })));
}

#[test]
fn builder_reports_the_first_missing_anchor() {
    let result = MorphemeTable::builder("nŭn", "tòngó", "sìfírí").build();
    assert!(matches!(result, Err(Error::MissingMorpheme { value: 1 })));
}

#[test]
fn caller_extended_tables_keep_their_extra_anchors() {
    let mut builder = MorphemeTable::builder("nŭn", "tòngó", "sìfírí");
    for (value, text) in [
        (1, "kérén"),
        (2, "fírín"),
        (3, "sàxán"),
        (4, "náání"),
        (5, "súlí"),
        (6, "sénní"),
        (7, "sólófèré"),
        (8, "sólómásàxán"),
        (9, "sólómánáání"),
        (10, "fuú"),
        (20, "m̀ɔx̀ɔǵɛŋ"),
    ] {
        builder = builder.root(value, text);
    }
    let table = builder
        .classifier(100, "k̀ɛḿɛ")
        .classifier(1000, "wúlù")
        .classifier(1_000_000, "mìlíɔ̃")
        .build()
        .expect("extended table builds");

    assert_eq!(table.text(1_000_000), Some("mìlíɔ̃"));
    assert_eq!(table.get(1_000_000).unwrap().kind(), MorphemeKind::Classifier);
}
