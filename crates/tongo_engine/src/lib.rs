//! Decomposition, rendering, and assembly engine for Tongo.
//!
//! This crate provides:
//! - [`decompose`] - Positional decomposition into [`Component`]s
//! - [`Renderer`] - Per-component morpheme resolution
//! - [`assemble`] - Connector-joined phrase assembly
//! - [`NumeralEngine`] - The generation engine with reference short-circuit
//! - [`tokenize`] / [`parse_number`] - The inverse direction, phrase to number
//!
//! [`Component`]: tongo_foundation::Component

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assemble;
pub mod decompose;
pub mod engine;
pub mod render;
pub mod tokenize;

pub use assemble::assemble;
pub use decompose::decompose;
pub use engine::{NumeralEngine, Rendering};
pub use render::Renderer;
pub use tokenize::{Token, parse_number, tokenize};
