//! Generator configuration.

use crate::builder::Indent;

/// Naming and layout options for generated procedures.
///
/// Every value the generator needs is carried here so [`ScriptGenerator`]
/// stays a pure function of its inputs.
///
/// [`ScriptGenerator`]: super::ScriptGenerator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Prepended to a column name to form its procedure parameter name.
    pub param_prefix: String,
    /// Prepended to a parameter name where the clause body references it.
    pub bind_marker: String,
    /// Indentation of procedure bodies.
    pub indent: Indent,
}

impl GeneratorOptions {
    pub const DEFAULT_PARAM_PREFIX: &'static str = "_";
    pub const DEFAULT_BIND_MARKER: &'static str = ":";

    pub fn with_param_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.param_prefix = prefix.into();
        self
    }

    pub fn with_bind_marker(mut self, marker: impl Into<String>) -> Self {
        self.bind_marker = marker.into();
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Parameter name for a column (`_name`).
    pub fn param_name(&self, column: &str) -> String {
        format!("{}{}", self.param_prefix, column)
    }

    /// Parameter reference inside a clause body (`:_name`).
    pub fn bind(&self, column: &str) -> String {
        format!("{}{}{}", self.bind_marker, self.param_prefix, column)
    }

    /// `column = :_column`
    pub fn assignment(&self, column: &str) -> String {
        format!("{} = {}", column, self.bind(column))
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            param_prefix: Self::DEFAULT_PARAM_PREFIX.to_string(),
            bind_marker: Self::DEFAULT_BIND_MARKER.to_string(),
            indent: Indent::default(),
        }
    }
}
