//! Provider-level column rows and flag derivation.

use sprocgen_core::ColumnDescriptor;

/// Nullability value meaning "nullable".
pub const NULLABLE_YES: &str = "yes";
/// Key value marking a primary-key column.
pub const KEY_PRIMARY: &str = "pri";
/// Extra-attributes value marking an autoincrement column.
pub const EXTRA_AUTO_INCREMENT: &str = "auto_increment";

/// A column row as reported by `SHOW COLUMNS` / `information_schema.COLUMNS`.
///
/// Flag columns are kept as the raw strings the server returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawColumn {
    pub field: String,
    pub sql_type: String,
    pub nullable: String,
    pub key: String,
    pub extra: String,
}

impl RawColumn {
    /// Derive the column descriptor, comparing sentinels case-insensitively.
    pub fn into_descriptor(self) -> ColumnDescriptor {
        ColumnDescriptor {
            is_nullable: flag_matches(&self.nullable, NULLABLE_YES),
            is_primary_key: flag_matches(&self.key, KEY_PRIMARY),
            is_auto_increment: flag_matches(&self.extra, EXTRA_AUTO_INCREMENT),
            name: self.field,
            sql_type: self.sql_type,
        }
    }
}

/// Case-insensitive comparison against a sentinel, ignoring surrounding blanks.
pub fn flag_matches(value: &str, sentinel: &str) -> bool {
    value.trim().eq_ignore_ascii_case(sentinel)
}
