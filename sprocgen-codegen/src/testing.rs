//! Table fixtures shared by tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use sprocgen_core::{ColumnDescriptor, Table};

/// `users`: autoincrement primary key plus a nullable name.
pub fn users() -> Table {
    Table::new(
        "users",
        vec![
            ColumnDescriptor::new("id", "INT").primary_key().auto_increment(),
            ColumnDescriptor::new("name", "VARCHAR(255)").nullable(),
        ],
    )
}

/// `logs`: no primary key at all.
pub fn logs() -> Table {
    Table::new(
        "logs",
        vec![
            ColumnDescriptor::new("created_at", "DATETIME"),
            ColumnDescriptor::new("message", "TEXT").nullable(),
        ],
    )
}

/// `memberships`: composite natural key, no autoincrement.
pub fn memberships() -> Table {
    Table::new(
        "memberships",
        vec![
            ColumnDescriptor::new("tenant_id", "INT").primary_key(),
            ColumnDescriptor::new("user_id", "INT").primary_key(),
            ColumnDescriptor::new("role", "VARCHAR(32)"),
            ColumnDescriptor::new("joined_at", "DATETIME").nullable(),
        ],
    )
}

/// `sequence`: a lone autoincrement key.
pub fn sequence() -> Table {
    Table::new(
        "sequence",
        vec![ColumnDescriptor::new("id", "BIGINT").primary_key().auto_increment()],
    )
}
