//! Positional decomposition of integers.
//!
//! Splits a number into ordered components following strict magnitude
//! precedence: thousands, then hundreds, then the tens position, then units.
//! Each branch applies to the value remaining after higher tiers are
//! removed, so the component values always sum back to the input.

use tongo_foundation::Component;

/// Decomposes `n` into positional components, highest magnitude first.
///
/// Zero yields no components: it is not decomposable and is handled by the
/// engine's dedicated zero-literal rule, never here.
///
/// A thousands multiplier may itself be 1000 or more (million range and
/// beyond); resolving such multipliers is the renderer's job, which recurses
/// through this function.
#[must_use]
pub fn decompose(n: u64) -> Vec<Component> {
    let mut components = Vec::new();
    let mut remaining = n;

    if remaining >= 1000 {
        components.push(Component::thousand(remaining / 1000));
        remaining %= 1000;
    }

    if remaining >= 100 {
        components.push(Component::hundred(remaining / 100));
        remaining %= 100;
    }

    if remaining >= 20 {
        if remaining / 10 == 2 {
            components.push(Component::twenty());
        } else {
            components.push(Component::tens(remaining / 10));
        }
        let units = remaining % 10;
        if units > 0 {
            components.push(Component::unit(units));
        }
    } else if remaining == 10 {
        components.push(Component::ten());
    } else if remaining >= 11 {
        components.push(Component::ten());
        components.push(Component::unit(remaining - 10));
    } else if remaining >= 1 {
        components.push(Component::unit(remaining));
    }

    components
}
