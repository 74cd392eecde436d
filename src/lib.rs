//! Tongo - Rule-based Susu numeral generation with morphological explanations.
//!
//! This crate re-exports all layers of the Tongo system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: tongo_runtime    — REPL, CLI, session state
//! Layer 3: tongo_explain    — Rule catalog, construction steps, JSON reports
//! Layer 2: tongo_reference  — Reference CSV loading, accuracy evaluation
//! Layer 1: tongo_engine     — Decomposition, rendering, assembly, tokenizing
//! Layer 0: tongo_foundation — Core types (morphemes, components, errors)
//! ```

pub use tongo_engine as engine;
pub use tongo_explain as explain;
pub use tongo_foundation as foundation;
pub use tongo_reference as reference;
pub use tongo_runtime as runtime;
