//! Line-oriented writer that turns fragments into indented SQL.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates SQL text, indenting block bodies one level per nesting.
///
/// # Example
///
/// ```
/// use sprocgen_codegen::builder::{CodeBuilder, CodeFragment, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::SQL);
/// builder.push_line("----- DELETE");
/// builder.apply_fragment(CodeFragment::block(
///     "BEGIN",
///     vec![CodeFragment::line("DELETE FROM users;")],
///     Some("END;".to_string()),
/// ));
///
/// assert_eq!(builder.build(), "----- DELETE\nBEGIN\n    DELETE FROM users;\nEND;\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line at the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add an empty line; never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Emit every fragment of a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Comment(text) => {
                self.push_line(&format!("-- {}", text));
            }
        }
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}
