//! Generate command report data structures.

use std::path::PathBuf;

use sprocgen_codegen::{GeneratedScript, SkipReason};
use sprocgen_core::ProcedureKind;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Tables written, in output order.
    pub tables: Vec<TableSummary>,
    /// Tables skipped under `--keep-going`.
    pub failed: Vec<FailedTable>,
    /// Script path; `None` when printed to stdout.
    pub output: Option<PathBuf>,
}

/// What was written for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub name: String,
    pub procedures: usize,
    pub skipped: Vec<(ProcedureKind, SkipReason)>,
}

/// A table left out of the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedTable {
    pub name: String,
    pub reason: String,
}

impl TableSummary {
    pub fn from_script(script: &GeneratedScript) -> Self {
        Self {
            name: script.table().to_string(),
            procedures: script.procedure_count(),
            skipped: script.skipped().collect(),
        }
    }

    fn describe(&self) -> String {
        let procedures = if self.procedures == 1 {
            "1 procedure".to_string()
        } else {
            format!("{} procedures", self.procedures)
        };
        if self.skipped.is_empty() {
            return format!("{}: {}", self.name, procedures);
        }

        let skipped = self
            .skipped
            .iter()
            .map(|(kind, reason)| format!("{} ({})", kind, reason))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {}, skipped {}", self.name, procedures, skipped)
    }
}

impl GenerateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn procedure_count(&self) -> usize {
        self.tables.iter().map(|t| t.procedures).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.tables.iter().map(|t| t.skipped.len()).sum()
    }

    /// Whether every selected table made it into the script.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for failed in &self.failed {
            out.warning(&format!("skipped table {}: {}", failed.name, failed.reason));
        }
        if !self.failed.is_empty() {
            out.newline();
        }

        out.section(&format!("Tables ({})", self.tables.len()));
        for table in &self.tables {
            out.list_item(&table.describe());
        }
        out.newline();

        out.key_value("Procedures", &self.procedure_count().to_string());
        let skipped = self.skipped_count();
        if skipped > 0 {
            out.key_value("Skipped sections", &skipped.to_string());
        }
        if !self.failed.is_empty() {
            let names: Vec<_> = self.failed.iter().map(|f| f.name.as_str()).collect();
            out.key_value("Failed tables", &names.join(", "));
        }
        match &self.output {
            Some(path) => out.key_value("Output", &path.display().to_string()),
            None => out.key_value("Output", "stdout"),
        }
    }
}

#[cfg(test)]
mod tests {
    use sprocgen_codegen::{ScriptGenerator, testing};

    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_summary() {
        let generator = ScriptGenerator::default();
        let report = GenerateReport {
            tables: vec![
                TableSummary::from_script(&generator.generate_table(&testing::users())),
                TableSummary::from_script(&generator.generate_table(&testing::logs())),
            ],
            failed: Vec::new(),
            output: Some(PathBuf::from("result.sql")),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Tables (2):",
                "  - users: 3 procedures",
                "  - logs: 1 procedure, skipped update (table should have a primary key), \
                 delete (table should have a primary key)",
                "",
                "Procedures: 4",
                "Skipped sections: 2",
                "Output: result.sql",
            ]
        );
    }

    #[test]
    fn test_render_failures() {
        let report = GenerateReport {
            failed: vec![FailedTable {
                name: "ghost".to_string(),
                reason: "table 'ghost' does not exist".to_string(),
            }],
            ..Default::default()
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_complete());
        assert_eq!(
            out.lines[0],
            "warning: skipped table ghost: table 'ghost' does not exist"
        );
        assert!(out.lines.contains(&"Failed tables: ghost".to_string()));
        assert_eq!(out.lines.last().unwrap(), "Output: stdout");
    }
}
