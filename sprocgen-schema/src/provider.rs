use async_trait::async_trait;
use sprocgen_core::{ColumnDescriptor, Table};

use crate::Result;

/// Source of table and column metadata.
///
/// Implementations must be shareable across worker tasks.
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    /// Short label for logs and reports (e.g. `mysql`).
    fn kind(&self) -> &'static str;

    /// All table names, in listing order.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Columns of `table` in declaration order.
    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Convenience wrapper returning a [`Table`].
    async fn table(&self, name: &str) -> Result<Table> {
        let columns = self.list_columns(name).await?;
        Ok(Table::new(name, columns))
    }

    /// Release held connections. Providers without any keep the default.
    async fn close(&self) {}
}
