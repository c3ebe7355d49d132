//! Offline schema provider reading a TOML description of the tables.
//!
//! ```toml
//! [[tables]]
//! name = "users"
//!
//! [[tables.columns]]
//! name = "id"
//! type = "INT"
//! key = "PRI"
//! extra = "auto_increment"
//!
//! [[tables.columns]]
//! name = "name"
//! type = "VARCHAR(255)"
//! nullable = true
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;
use sprocgen_core::{ColumnDescriptor, Table};

use crate::{
    RawColumn, Result, SchemaError, SchemaProvider,
    raw::{EXTRA_AUTO_INCREMENT, KEY_PRIMARY, NULLABLE_YES},
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaDocument {
    #[serde(default)]
    tables: Vec<TableEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableEntry {
    name: String,
    #[serde(default)]
    columns: Vec<ColumnEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnEntry {
    name: String,
    #[serde(rename = "type")]
    sql_type: String,
    /// Raw sentinel (`"YES"`) or boolean.
    nullable: Option<Flag>,
    /// Raw key attribute (`"PRI"`).
    key: Option<String>,
    /// Raw extra attributes (`"auto_increment"`).
    extra: Option<String>,
    primary_key: Option<bool>,
    auto_increment: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Raw(String),
}

impl ColumnEntry {
    fn into_descriptor(self) -> ColumnDescriptor {
        let sentinel = |set: Option<bool>, raw: Option<String>, value: &str| match set {
            Some(true) => value.to_string(),
            Some(false) => String::new(),
            None => raw.unwrap_or_default(),
        };

        let nullable = match self.nullable {
            Some(Flag::Bool(true)) => NULLABLE_YES.to_string(),
            Some(Flag::Bool(false)) | None => String::new(),
            Some(Flag::Raw(raw)) => raw,
        };

        RawColumn {
            field: self.name,
            sql_type: self.sql_type,
            nullable,
            key: sentinel(self.primary_key, self.key, KEY_PRIMARY),
            extra: sentinel(self.auto_increment, self.extra, EXTRA_AUTO_INCREMENT),
        }
        .into_descriptor()
    }
}

/// Tables loaded from a schema file, kept in document order.
#[derive(Debug, Clone, Default)]
pub struct SchemaFile {
    tables: IndexMap<String, Vec<ColumnDescriptor>>,
}

impl SchemaFile {
    /// Read and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse schema file content; `path` is only used in error messages.
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document: SchemaDocument =
            toml::from_str(content).map_err(|source| SchemaError::Parse {
                path: path.clone(),
                source,
            })?;

        let mut tables = IndexMap::with_capacity(document.tables.len());
        for entry in document.tables {
            if tables.contains_key(&entry.name) {
                return Err(SchemaError::Invalid {
                    path,
                    message: format!("table '{}' is defined more than once", entry.name),
                });
            }
            let columns = entry
                .columns
                .into_iter()
                .map(ColumnEntry::into_descriptor)
                .collect();
            tables.insert(entry.name, columns);
        }

        Ok(Self { tables })
    }

    /// Build from in-memory tables; later duplicates replace earlier ones.
    pub fn from_tables(tables: impl IntoIterator<Item = Table>) -> Self {
        Self {
            tables: tables.into_iter().map(|t| (t.name, t.columns)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[async_trait]
impl SchemaProvider for SchemaFile {
    fn kind(&self) -> &'static str {
        "schema-file"
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.keys().cloned().collect())
    }

    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownTable(table.to_string()))
    }
}
