//! REPL and CLI runtime for Tongo.
//!
//! This crate provides:
//! - [`Session`] - Engine plus reference-data state for interactive use
//! - [`Repl`] - Interactive numeral explorer
//! - [`LineEditor`] - Swappable line-editing seam (rustyline by default)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use repl::{Repl, format_explanation};
pub use session::Session;
