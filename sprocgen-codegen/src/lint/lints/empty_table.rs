//! Lint for tables without columns.

use super::super::{Lint, LintContext};
use crate::Diagnostic;

/// Lint that rejects tables the provider returned no columns for.
pub struct EmptyTableLint;

impl Lint for EmptyTableLint {
    fn name(&self) -> &'static str {
        "empty-table"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        if ctx.table.columns.is_empty() {
            diagnostics.push(
                Diagnostic::error(
                    self.name(),
                    format!("table '{}' has no columns", ctx.table.name),
                )
                .at(ctx.table.name.clone()),
            );
        }
    }
}
