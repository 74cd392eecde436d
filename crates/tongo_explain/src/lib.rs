//! Explanation system for Tongo.
//!
//! Turns the engine's decomposition trace into human-readable construction
//! steps, a deduplicated list of applied rules, and serializable reports.
//! Everything here is derivative: the explainer reuses the engine's own
//! render/assemble path and never re-derives a phrase through a second code
//! path, so the displayed explanation cannot drift from the displayed
//! translation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod explanation;
pub mod report;
pub mod rules;

pub use explanation::{Explanation, explain};
pub use report::to_json;
pub use rules::{RuleDescription, describe};
