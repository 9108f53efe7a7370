//! Line-oriented text builder for the generated C#.

use super::Indent;

/// Accumulates lines at a tracked indentation level.
///
/// Calls chain on `&mut Self`, so a builder can be filled from loops:
///
/// ```
/// use jsonaot_codegen::builder::{CodeBuilder, Indent};
///
/// let mut b = CodeBuilder::new(Indent::CSHARP);
/// b.push_line("namespace App").push_line("{").push_indent();
/// for name in ["Order", "Invoice"] {
///     b.push_line(&format!("public class {} {{ }}", name));
/// }
/// b.push_dedent().push_line("}");
///
/// assert_eq!(
///     b.build(),
///     "namespace App\n{\n    public class Order { }\n    public class Invoice { }\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Indented line followed by `\n`.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.indent.write(&mut self.buffer, self.level);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Empty line, never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Text copied as is, without indentation or terminator.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}
