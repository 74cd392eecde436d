//! Property-based invariants of decomposition and generation.

use proptest::prelude::*;
use tongo_engine::{NumeralEngine, decompose, parse_number};
use tongo_foundation::MorphemeTable;

proptest! {
    #[test]
    fn sum_invariant(n in 1_u64..10_000_000) {
        let sum: u64 = decompose(n).iter().map(|c| c.value).sum();
        prop_assert_eq!(sum, n);
    }

    #[test]
    fn ranks_strictly_decrease(n in 1_u64..10_000_000) {
        let components = decompose(n);
        for pair in components.windows(2) {
            prop_assert!(pair[0].tier.rank() > pair[1].tier.rank());
        }
    }

    #[test]
    fn generation_is_deterministic(n in 0_i64..10_000_000) {
        let engine = NumeralEngine::susu();
        prop_assert_eq!(engine.generate(n).unwrap(), engine.generate(n).unwrap());
    }

    #[test]
    fn single_component_output_is_bare(
        n in prop::sample::select(
            (1_u64..=9)
                .chain([10, 20])
                .chain((1..=9).map(|m| m * 100))
                .chain((1..=9).map(|m| m * 1000))
                .collect::<Vec<u64>>()
        )
    ) {
        let components = decompose(n);
        prop_assert_eq!(components.len(), 1);
        let engine = NumeralEngine::susu();
        let phrase = engine.generate(i64::try_from(n).unwrap()).unwrap();
        // A single-component phrase may still contain spaces (scale word +
        // multiplier) but never the connector between components.
        let connector = format!(" {} ", engine.table().connector());
        prop_assert!(!phrase.contains(&connector));
    }

    #[test]
    fn recursive_consistency(multiplier in 10_u64..10_000) {
        let engine = NumeralEngine::susu();
        let standalone = engine.phrase(multiplier).unwrap();
        let compound = engine.generate(i64::try_from(multiplier * 1000).unwrap()).unwrap();
        let expected_prefix = format!("wúlù {}", standalone);
        prop_assert!(compound.starts_with(&expected_prefix));
    }

    #[test]
    fn round_trip_within_tokenizer_range(n in 1_u64..10_000) {
        let engine = NumeralEngine::susu();
        let phrase = engine.generate(i64::try_from(n).unwrap()).unwrap();
        prop_assert_eq!(parse_number(engine.table(), &phrase), Some(n));
    }

    #[test]
    fn generated_words_all_come_from_the_table(n in 1_u64..10_000) {
        let table = MorphemeTable::susu();
        let engine = NumeralEngine::susu();
        let phrase = engine.generate(i64::try_from(n).unwrap()).unwrap();
        for word in phrase.split_whitespace() {
            let known = word == table.connector()
                || word == table.tens_former()
                || table.iter().any(|(_, m)| m.text() == word);
            prop_assert!(known, "unknown word {word:?} in phrase for {n}");
        }
    }
}
