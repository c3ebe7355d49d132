//! Schema providers for sprocgen.
//!
//! A [`SchemaProvider`] lists tables and, per table, the ordered column
//! descriptors the generator consumes. Two providers ship with the crate:
//!
//! - [`MySqlSchemaProvider`] - a live MySQL database through `sqlx`
//! - [`SchemaFile`] - a TOML description of the tables, for offline runs

mod error;
mod file;
mod mysql;
mod provider;
mod raw;

pub use error::{Result, SchemaError};
pub use file::SchemaFile;
pub use mysql::{MySqlSchemaProvider, PoolSettings};
pub use provider::SchemaProvider;
pub use raw::{RawColumn, flag_matches};
