use std::path::PathBuf;

use thiserror::Error;

/// Result type for schema provider operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Failures while reading a database schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema capability can't be established or used.
    #[error("can't connect to the database")]
    Connection(#[source] sqlx::Error),

    #[error("can't get the list of all tables")]
    ListTables(#[source] sqlx::Error),

    #[error("can't get the list of all columns for {table} table")]
    Query {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("table '{0}' does not exist")]
    UnknownTable(String),

    #[error("failed to read schema file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema file '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid schema file '{path}': {message}")]
    Invalid { path: PathBuf, message: String },
}

impl SchemaError {
    /// Classify a driver error raised while querying `table`.
    ///
    /// Pool and transport failures mean the database itself is unusable, so
    /// they are reported as connection errors rather than per-table ones.
    pub(crate) fn from_query(table: Option<&str>, source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Connection(source),
            source => match table {
                Some(table) => Self::Query {
                    table: table.to_string(),
                    source,
                },
                None => Self::ListTables(source),
            },
        }
    }

    /// Whether the error is scoped to a single table.
    ///
    /// Only these may be skipped when a run continues past failures.
    pub fn is_table_scoped(&self) -> bool {
        matches!(self, Self::Query { .. } | Self::UnknownTable(_))
    }

    /// The table the error is about, if any.
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::Query { table, .. } | Self::UnknownTable(table) => Some(table),
            _ => None,
        }
    }
}
