//! Stored-procedure generation for sprocgen.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generator`] - The per-table script generator
//! - [`lint`] - Schema lints reported by `sprocgen check`
//! - [`testing`] - Table fixtures (feature-gated)

pub mod builder;
mod diagnostic;
pub mod generator;
pub mod lint;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use diagnostic::{Diagnostic, Severity};
pub use generator::{GeneratedScript, GeneratorOptions, ScriptGenerator, SkipReason};
pub use lint::Linter;
