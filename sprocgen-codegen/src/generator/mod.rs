//! Stored-procedure script generation.
//!
//! [`ScriptGenerator`] turns the columns of one table into a script holding a
//! header line followed by an Insert, Update and Delete section. Sections that
//! can't be generated (no primary key, nothing to update) become a single SQL
//! comment so one bad table never aborts the rest of a run.
//!
//! # Example
//!
//! ```
//! use sprocgen_codegen::generator::{GeneratorOptions, ScriptGenerator};
//! use sprocgen_core::ColumnDescriptor;
//!
//! let generator = ScriptGenerator::new(GeneratorOptions::default());
//! let script = generator.generate(
//!     "users",
//!     &[
//!         ColumnDescriptor::new("id", "INT").primary_key().auto_increment(),
//!         ColumnDescriptor::new("name", "VARCHAR(255)").nullable(),
//!     ],
//! );
//!
//! assert!(script.as_str().contains("CREATE PROCEDURE usp_users_insert (IN _name VARCHAR(255))"));
//! assert_eq!(script.procedure_count(), 3);
//! ```

mod clause;
mod options;
mod procedure;
mod script;

pub use clause::{Clause, SkipReason};
pub use options::GeneratorOptions;
pub use procedure::StoredProcedure;
pub use script::{GeneratedScript, Section, SectionOutcome};
use sprocgen_core::{ColumnDescriptor, ProcedureKind, Table};

use crate::builder::{CodeBuilder, CodeFragment};

/// Generates the CRUD procedure script for a table.
///
/// Holds no state besides its options, so a single instance can be shared
/// across worker tasks.
#[derive(Debug, Clone, Default)]
pub struct ScriptGenerator {
    options: GeneratorOptions,
}

impl ScriptGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Generate the script for `table` from its columns in declaration order.
    pub fn generate(&self, table: &str, columns: &[ColumnDescriptor]) -> GeneratedScript {
        let mut builder = CodeBuilder::new(self.options.indent);
        builder.push_line(&format!("----- TABLE: {}", table));

        let mut sections = Vec::with_capacity(ProcedureKind::ALL.len());
        for kind in ProcedureKind::ALL {
            builder.push_line(&format!("----- {}", kind.label()));

            let outcome = match Clause::build(kind, table, columns, &self.options) {
                Ok(clause) => {
                    let procedure = StoredProcedure::from_clause(table, clause, &self.options);
                    builder.emit(&procedure);
                    SectionOutcome::Generated(procedure.name)
                }
                Err(reason) => {
                    builder.apply_fragment(CodeFragment::comment(reason.message()));
                    SectionOutcome::Skipped(reason)
                }
            };
            builder.push_blank();

            sections.push(Section { kind, outcome });
        }

        GeneratedScript::new(table, builder.build(), sections)
    }

    /// Generate the script for a [`Table`].
    pub fn generate_table(&self, table: &Table) -> GeneratedScript {
        self.generate(&table.name, &table.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id", "INT").primary_key().auto_increment(),
            ColumnDescriptor::new("name", "VARCHAR(255)").nullable(),
        ]
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let script = ScriptGenerator::default().generate("users", &users());
        let kinds: Vec<_> = script.sections().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, ProcedureKind::ALL.to_vec());

        let text = script.as_str();
        let insert = text.find("----- INSERT").unwrap();
        let update = text.find("----- UPDATE").unwrap();
        let delete = text.find("----- DELETE").unwrap();
        assert!(text.starts_with("----- TABLE: users\n"));
        assert!(insert < update && update < delete);
    }

    #[test]
    fn test_procedure_names_recorded() {
        let script = ScriptGenerator::default().generate("users", &users());
        assert_eq!(
            script.sections()[1].outcome,
            SectionOutcome::Generated("usp_users_update".to_string())
        );
        assert_eq!(script.skipped().count(), 0);
    }

    #[test]
    fn test_missing_key_reported_inline() {
        let columns = vec![ColumnDescriptor::new("line", "TEXT")];
        let script = ScriptGenerator::default().generate("logs", &columns);

        assert_eq!(script.procedure_count(), 1);
        let skipped: Vec<_> = script.skipped().collect();
        assert_eq!(
            skipped,
            vec![
                (ProcedureKind::Update, SkipReason::MissingPrimaryKey),
                (ProcedureKind::Delete, SkipReason::MissingPrimaryKey),
            ]
        );
        assert_eq!(
            script
                .as_str()
                .matches("-- table should have a primary key")
                .count(),
            2
        );
    }

    #[test]
    fn test_generate_table_matches_generate() {
        let generator = ScriptGenerator::default();
        let table = Table::new("users", users());
        assert_eq!(
            generator.generate_table(&table),
            generator.generate("users", &users())
        );
    }

    #[test]
    fn test_custom_indent() {
        let generator =
            ScriptGenerator::new(GeneratorOptions::default().with_indent(crate::builder::Indent::Tab));
        let script = generator.generate("users", &users());
        assert!(script.as_str().contains("BEGIN\n\tINSERT INTO users (name)\n"));
    }
}
