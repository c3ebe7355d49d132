//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from schema lints.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of tables checked.
    pub table_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        let tables = plural(self.table_count, "table");
        if self.is_valid() {
            out.preformatted(&format!("✓ {} checked", tables));
        } else {
            out.preformatted(&format!(
                "✗ {} checked, {}",
                tables,
                plural(self.errors.len(), "error")
            ));
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
