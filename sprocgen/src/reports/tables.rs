//! Tables command report.

use sprocgen_core::{ColumnDescriptor, Table};

use super::output::{Output, Report};

#[derive(Debug)]
pub struct TablesReport {
    /// Provider label.
    pub source: String,
    /// Tables with their columns, in listing order.
    pub tables: Vec<Table>,
}

fn describe(column: &ColumnDescriptor) -> String {
    let mut flags = Vec::new();
    if column.is_primary_key {
        flags.push("primary key");
    }
    if column.is_auto_increment {
        flags.push("auto_increment");
    }
    if column.is_nullable {
        flags.push("nullable");
    }

    if flags.is_empty() {
        format!("{} {}", column.name, column.sql_type)
    } else {
        format!("{} {} ({})", column.name, column.sql_type, flags.join(", "))
    }
}

impl Report for TablesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.tables.is_empty() {
            out.preformatted(&format!("no tables found in {}", self.source));
            return;
        }

        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&table.name);
            for column in &table.columns {
                out.list_item(&describe(column));
            }
        }
    }
}
