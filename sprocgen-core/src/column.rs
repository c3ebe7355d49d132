//! Column and table descriptors produced by schema providers.

/// Metadata for a single physical column.
///
/// Instances are immutable once a provider produces them. Declaration order
/// inside a [`Table`] is significant: it drives generated parameter order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnDescriptor {
    /// Column name as declared in the database.
    pub name: String,
    /// Declared SQL type, copied verbatim (e.g. `varchar(255)`).
    pub sql_type: String,
    /// Whether the column accepts NULL.
    pub is_nullable: bool,
    /// Whether the column is part of the primary key.
    pub is_primary_key: bool,
    /// Whether the database assigns the value on insert.
    pub is_auto_increment: bool,
}

impl ColumnDescriptor {
    /// Create a non-null, non-key column.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            is_nullable: false,
            is_primary_key: false,
            is_auto_increment: false,
        }
    }

    /// Mark the column as nullable.
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    /// Mark the column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Mark the column as autoincrement.
    pub fn auto_increment(mut self) -> Self {
        self.is_auto_increment = true;
        self
    }

    /// Returns true if generated insert/update statements may write this column.
    pub fn is_writable(&self) -> bool {
        !self.is_auto_increment
    }
}

/// A table: a name plus its columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Columns that are not autoincrement, in declaration order.
    pub fn writable_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| c.is_writable())
    }

    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(|c| c.is_primary_key)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Table {
        Table::new(
            "users",
            vec![
                ColumnDescriptor::new("id", "INT").primary_key().auto_increment(),
                ColumnDescriptor::new("name", "VARCHAR(255)").nullable(),
                ColumnDescriptor::new("tenant", "INT").primary_key(),
            ],
        )
    }

    #[test]
    fn test_column_builder_defaults() {
        let col = ColumnDescriptor::new("name", "TEXT");
        assert!(!col.is_nullable);
        assert!(!col.is_primary_key);
        assert!(!col.is_auto_increment);
        assert!(col.is_writable());
    }

    #[test]
    fn test_writable_columns_skip_auto_increment() {
        let table = users();
        let cols: Vec<_> = table.writable_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(cols, vec!["name", "tenant"]);
    }

    #[test]
    fn test_has_primary_key() {
        assert!(users().has_primary_key());
        let logs = Table::new("logs", vec![ColumnDescriptor::new("line", "TEXT")]);
        assert!(!logs.has_primary_key());
    }

    #[test]
    fn test_column_lookup() {
        let table = users();
        assert_eq!(table.column("name").map(|c| c.is_nullable), Some(true));
        assert!(table.column("missing").is_none());
    }
}
