//! Core operations.
//!
//! This module contains the business logic for sprocgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
mod filter;
pub mod generate;
pub mod tables;

pub use check::check;
pub use filter::TableFilter;
pub use generate::{GenerateOptions, generate};
pub use tables::tables;
