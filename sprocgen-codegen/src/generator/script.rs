//! The per-table script artifact.

use std::fmt;

use sprocgen_core::ProcedureKind;

use super::SkipReason;

/// What ended up in one section of a table's script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// A procedure with this name was emitted.
    Generated(String),
    /// A diagnostic line was emitted instead.
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: ProcedureKind,
    pub outcome: SectionOutcome,
}

/// Generated SQL for one table.
///
/// Immutable once built; the orchestrator appends it to the output as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    table: String,
    text: String,
    sections: Vec<Section>,
}

impl GeneratedScript {
    pub(crate) fn new(table: impl Into<String>, text: String, sections: Vec<Section>) -> Self {
        Self {
            table: table.into(),
            text,
            sections,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Sections in emission order (Insert, Update, Delete).
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of `CREATE PROCEDURE` blocks in the script.
    pub fn procedure_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s.outcome, SectionOutcome::Generated(_)))
            .count()
    }

    /// Sections replaced by diagnostics, with their reason.
    pub fn skipped(&self) -> impl Iterator<Item = (ProcedureKind, SkipReason)> + '_ {
        self.sections.iter().filter_map(|s| match s.outcome {
            SectionOutcome::Skipped(reason) => Some((s.kind, reason)),
            SectionOutcome::Generated(_) => None,
        })
    }
}

impl AsRef<str> for GeneratedScript {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for GeneratedScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
