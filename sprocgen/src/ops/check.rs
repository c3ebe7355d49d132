//! Check operation - schema lints without writing anything.

use eyre::{Context, Result};
use sprocgen_codegen::{GeneratorOptions, Linter};
use sprocgen_schema::SchemaProvider;
use tracing::debug;

use super::TableFilter;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint over every selected table and splits the diagnostics
/// into errors and warnings.
pub async fn check(
    provider: &dyn SchemaProvider,
    linter: &Linter,
    options: &GeneratorOptions,
    filter: &TableFilter,
) -> Result<CheckReport> {
    let tables = filter.apply(
        provider
            .list_tables()
            .await
            .wrap_err("can't get the list of all tables")?,
    );

    debug!(lints = ?linter.lint_names(), "running lints");
    let mut report = CheckReport {
        table_count: tables.len(),
        ..Default::default()
    };

    for name in &tables {
        let table = provider
            .table(name)
            .await
            .wrap_err_with(|| format!("can't check {name} table"))?;
        let diagnostics = linter.check(&table, options);
        debug!(table = %name, diagnostics = diagnostics.len(), "checked");

        for diag in diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{}\n  --> {}", diag.message, loc),
                None => diag.message.clone(),
            };
            if diag.severity.is_error() {
                report.errors.push(msg);
            } else {
                report.warnings.push(msg);
            }
        }
    }

    Ok(report)
}
