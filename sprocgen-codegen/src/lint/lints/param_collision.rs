//! Lint for parameter names that shadow columns.

use std::collections::HashMap;

use super::super::{Lint, LintContext};
use crate::Diagnostic;

/// Lint that rejects tables where a generated parameter name equals a column
/// name, or two columns map to the same parameter.
///
/// Inside a procedure body MySQL resolves such a name to the parameter, so
/// `WHERE _id = _id` silently matches every row.
pub struct ParamCollisionLint;

impl Lint for ParamCollisionLint {
    fn name(&self) -> &'static str {
        "param-collision"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let table = ctx.table;
        let mut seen: HashMap<String, &str> = HashMap::new();

        for column in &table.columns {
            let param = ctx.options.param_name(&column.name);

            if let Some(other) = seen.insert(param.clone(), &column.name) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "columns '{}' and '{}' both map to parameter '{}'",
                            other, column.name, param
                        ),
                    )
                    .at(format!("{}.{}", table.name, column.name)),
                );
            }

            if table.column(&param).is_some() {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "parameter '{}' for column '{}' collides with column '{}'",
                            param, column.name, param
                        ),
                    )
                    .at(format!("{}.{}", table.name, column.name)),
                );
            }
        }
    }
}
