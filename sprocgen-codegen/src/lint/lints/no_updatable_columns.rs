//! Lint for keyed tables with nothing to SET.

use super::super::{Lint, LintContext};
use crate::Diagnostic;

/// Lint that warns when every column is autoincrement, so no Update is generated.
pub struct NoUpdatableColumnsLint;

impl Lint for NoUpdatableColumnsLint {
    fn name(&self) -> &'static str {
        "no-updatable-columns"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let table = ctx.table;
        if table.has_primary_key() && table.writable_columns().next().is_none() {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "table '{}' has no updatable columns; update procedure will be skipped",
                        table.name
                    ),
                )
                .at(table.name.clone()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use sprocgen_core::{ColumnDescriptor, Table};

    use super::*;
    use crate::generator::GeneratorOptions;

    fn run(table: &Table) -> Vec<Diagnostic> {
        let options = GeneratorOptions::default();
        let mut diagnostics = Vec::new();
        NoUpdatableColumnsLint.check(&LintContext { table, options: &options }, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_only_auto_increment_key() {
        let table = Table::new(
            "sequence",
            vec![ColumnDescriptor::new("id", "BIGINT").primary_key().auto_increment()],
        );
        let diagnostics = run(&table);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("sequence"));
    }

    #[test]
    fn test_unkeyed_table_left_to_other_lint() {
        let table = Table::new(
            "counter",
            vec![ColumnDescriptor::new("n", "INT").auto_increment()],
        );
        assert!(run(&table).is_empty());
    }
}
