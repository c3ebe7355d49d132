//! Schema lints run by `sprocgen check`.

pub mod lints;

pub use lints::{EmptyTableLint, MissingPrimaryKeyLint, NoUpdatableColumnsLint, ParamCollisionLint};
use sprocgen_core::Table;

use crate::{Diagnostic, generator::GeneratorOptions};

/// What a lint gets to look at.
pub struct LintContext<'a> {
    pub table: &'a Table,
    pub options: &'a GeneratorOptions,
}

/// A lint that checks a table for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint, used as the diagnostic phase.
    fn name(&self) -> &'static str;

    /// Check the table and add any diagnostics.
    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs the built-in lints in a fixed order.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(EmptyTableLint),
                Box::new(MissingPrimaryKeyLint),
                Box::new(NoUpdatableColumnsLint),
                Box::new(ParamCollisionLint),
            ],
        }
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint over `table`.
    pub fn check(&self, table: &Table, options: &GeneratorOptions) -> Vec<Diagnostic> {
        let ctx = LintContext { table, options };
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(&ctx, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
