//! Built-in schema lints.

mod empty_table;
mod missing_primary_key;
mod no_updatable_columns;
mod param_collision;

pub use empty_table::EmptyTableLint;
pub use missing_primary_key::MissingPrimaryKeyLint;
pub use no_updatable_columns::NoUpdatableColumnsLint;
pub use param_collision::ParamCollisionLint;
