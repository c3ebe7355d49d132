//! Lint for tables without a primary key.

use super::super::{Lint, LintContext};
use crate::Diagnostic;

/// Lint that warns when Update and Delete procedures will be skipped.
pub struct MissingPrimaryKeyLint;

impl Lint for MissingPrimaryKeyLint {
    fn name(&self) -> &'static str {
        "missing-primary-key"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let table = ctx.table;
        if !table.columns.is_empty() && !table.has_primary_key() {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "table '{}' has no primary key; update and delete procedures will be skipped",
                        table.name
                    ),
                )
                .at(table.name.clone()),
            );
        }
    }
}
