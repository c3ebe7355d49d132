//! Stored-procedure kinds.

use std::fmt;

/// The CRUD procedure generated for every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProcedureKind {
    Insert,
    Update,
    Delete,
}

impl ProcedureKind {
    /// All kinds, in the order sections are emitted.
    pub const ALL: [ProcedureKind; 3] = [Self::Insert, Self::Update, Self::Delete];

    /// Lowercase name used in procedure identifiers (`usp_<table>_<kind>`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Uppercase label used in section headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    /// Whether generating this kind needs at least one primary-key column.
    pub fn requires_primary_key(&self) -> bool {
        matches!(self, Self::Update | Self::Delete)
    }

    /// Name of the procedure generated for `table`.
    pub fn procedure_name(&self, table: &str) -> String {
        format!("usp_{}_{}", table, self.as_str())
    }
}

impl fmt::Display for ProcedureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
