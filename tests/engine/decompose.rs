//! Integration tests for positional decomposition.

use tongo_engine::decompose;
use tongo_foundation::{Component, Tier};

#[test]
fn every_branch_of_the_decomposition() {
    // unit
    assert_eq!(decompose(7), vec![Component::unit(7)]);
    // bare ten
    assert_eq!(decompose(10), vec![Component::ten()]);
    // teen
    assert_eq!(decompose(14), vec![Component::ten(), Component::unit(4)]);
    // dedicated twenty
    assert_eq!(decompose(20), vec![Component::twenty()]);
    assert_eq!(decompose(29), vec![Component::twenty(), Component::unit(9)]);
    // tens-former multiples
    assert_eq!(decompose(90), vec![Component::tens(9)]);
    // hundreds
    assert_eq!(decompose(700), vec![Component::hundred(7)]);
    // thousands
    assert_eq!(decompose(4000), vec![Component::thousand(4)]);
}

#[test]
fn remainders_cascade_through_lower_tiers() {
    assert_eq!(
        decompose(2519),
        vec![
            Component::thousand(2),
            Component::hundred(5),
            Component::ten(),
            Component::unit(9),
        ]
    );
    assert_eq!(
        decompose(1020),
        vec![Component::thousand(1), Component::twenty()]
    );
    assert_eq!(
        decompose(1001),
        vec![Component::thousand(1), Component::unit(1)]
    );
}

#[test]
fn at_most_one_component_per_rank() {
    for n in [1, 15, 25, 99, 110, 1234, 87_654] {
        let components = decompose(n);
        let mut ranks: Vec<u8> = components.iter().map(|c| c.tier.rank()).collect();
        let before = ranks.len();
        ranks.dedup();
        assert_eq!(ranks.len(), before, "duplicate rank in decompose({n})");
    }
}

#[test]
fn million_range_flows_into_the_thousands_multiplier() {
    let components = decompose(2_500_000);
    assert_eq!(components[0], Component::thousand(2500));
    assert_eq!(components[0].tier, Tier::Thousand);
    assert_eq!(components.len(), 1);
}

#[test]
fn zero_decomposes_to_nothing() {
    assert!(decompose(0).is_empty());
}
