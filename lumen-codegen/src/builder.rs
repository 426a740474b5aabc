//! Code builder utility for generating properly indented code.

const INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use lumen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("fn main() {")
///     .indent()
///     .line("println!(\"Hello, world!\");")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "fn main() {\n    println!(\"Hello, world!\");\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line of code with the current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Adds a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Adds a `/// text` doc comment line; an empty `text` yields a bare
    /// `///` so generated doc comments never carry trailing whitespace.
    pub fn doc(mut self, text: &str) -> Self {
        self.write_indent();
        if text.is_empty() {
            self.buffer.push_str("///");
        } else {
            self.buffer.push_str("/// ");
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Increases the indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decreases the indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Adds an indented block between a header and a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use lumen_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::new()
    ///     .block("fn main() {", "}", |b| b.line("println!(\"Hello\");"))
    ///     .build();
    ///
    /// assert_eq!(code, "fn main() {\n    println!(\"Hello\");\n}\n");
    /// ```
    pub fn block<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterates and adds content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consumes the builder and returns the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
