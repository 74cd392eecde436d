//! Reference data loading and evaluation for Tongo.
//!
//! This crate provides:
//! - [`parse_reference`] / [`load_reference`] - Strict semicolon-CSV loading
//! - [`evaluate`] - Rule-only output measured against curated data
//!
//! The curated table is the authoritative source for numbers it covers; this
//! crate owns the I/O so the engine itself stays pure.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod evaluate;
pub mod loader;

pub use evaluate::{Evaluation, Mismatch, evaluate};
pub use loader::{load_reference, parse_reference};
