//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for renderers that walk a tree.
///
/// # Example
///
/// ```
/// use svcgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::go()
///     .line("func main() {")
///     .indent()
///     .line("fmt.Println(\"hello\")")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "func main() {\n\tfmt.Println(\"hello\")\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation (Go default).
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    ///
    /// Continuation lines embedded in `s` are written as-is, so multi-line
    /// expressions must carry their own indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a line comment with the given prefix, one line per input line.
    pub fn push_comment(&mut self, prefix: &str, text: &str) -> &mut Self {
        for line in text.lines() {
            self.write_indent();
            self.buffer.push_str(prefix);
            if !line.is_empty() {
                self.buffer.push(' ');
                self.buffer.push_str(line);
            }
            self.buffer.push('\n');
        }
        self
    }

    /// Write `header`, run `f` one level deeper, then write `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        f(self);
        self.push_dedent().push_line(close)
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// The indentation style this builder writes.
    pub fn indent_style(&self) -> Indent {
        self.indent
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}
