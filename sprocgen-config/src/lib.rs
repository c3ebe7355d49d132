//! `sprocgen.toml` parsing and validation.
//!
//! Errors carry the source text so they render as `miette` diagnostics
//! pointing at the offending key.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{Config, DatabaseConfig, GeneratorConfig, OutputConfig, validate_param_prefix};
pub use error::{Error, Result, SourceContext};
pub use file::ConfigFile;
