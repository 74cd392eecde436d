//! Core types for the Tongo numeral system.
//!
//! This crate provides:
//! - [`MorphemeTable`] - The immutable Susu morpheme inventory
//! - [`Component`] / [`RenderedComponent`] - Positional decomposition output
//! - [`Tier`] / [`RuleId`] - Magnitude tiers and morphological rule identifiers
//! - [`ReferenceTable`] - Curated number-to-phrase overrides
//! - [`Error`] - Rich error types for the whole workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod component;
pub mod error;
pub mod morpheme;
pub mod reference;

pub use component::{Component, RenderedComponent, RuleId, TextSource, Tier};
pub use error::{Error, Result};
pub use morpheme::{Morpheme, MorphemeKind, MorphemeTable, MorphemeTableBuilder};
pub use reference::ReferenceTable;
