//! Core types for the sprocgen stored-procedure generator.
//!
//! This crate provides the data model shared by schema providers, the
//! script generator and the command-line front end.

mod column;
mod file;
mod procedure;

// Schema data model
pub use column::{ColumnDescriptor, Table};
// Output script handling
pub use file::{OutputFile, Overwrite};
pub use procedure::ProcedureKind;
