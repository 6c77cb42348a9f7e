//! Indentation-aware text printer.

use std::{
    borrow::Cow,
    io::{self, Write},
};

use super::Indent;

/// Writes text to a borrowed sink, prefixing every new line with the
/// current indentation.
///
/// Indentation is applied lazily: it is written before the first
/// non-empty fragment that follows a line break, never in the middle of
/// a line and never on an empty line. Write methods return the printer
/// so calls can be chained with `?`.
///
/// # Example
///
/// ```
/// use classgen_core::Printer;
///
/// # fn main() -> std::io::Result<()> {
/// let mut out = Vec::new();
/// let mut printer = Printer::new(&mut out);
/// printer.print("class Foo")?.println(" {")?;
/// printer.indent();
/// printer.println("int x;")?;
/// printer.undent();
/// printer.print("}")?;
///
/// assert_eq!(String::from_utf8(out).unwrap(), "class Foo {\n  int x;\n}");
/// # Ok(())
/// # }
/// ```
///
/// The printer never flushes or closes the sink; that stays with the
/// owner of the writer.
#[derive(Debug)]
pub struct Printer<'a, W: Write + ?Sized> {
    out: &'a mut W,
    unit: Cow<'static, str>,
    indent_level: usize,
    needs_indent: bool,
}

impl<'a, W: Write + ?Sized> Printer<'a, W> {
    /// Create a printer using the Java indentation unit.
    pub fn new(out: &'a mut W) -> Self {
        Self::with_indent(out, Indent::JAVA)
    }

    /// Create a printer with the specified indentation unit.
    pub fn with_indent(out: &'a mut W, indent: Indent) -> Self {
        Self {
            out,
            unit: indent.as_str(),
            indent_level: 0,
            needs_indent: true,
        }
    }

    /// Write text without a trailing newline.
    ///
    /// Embedded newlines are honored: each line segment that starts a new
    /// line receives the indent prefix.
    pub fn print(&mut self, text: &str) -> io::Result<&mut Self> {
        let mut segments = text.split('\n').peekable();
        while let Some(segment) = segments.next() {
            if !segment.is_empty() {
                if self.needs_indent {
                    self.write_indent()?;
                    self.needs_indent = false;
                }
                self.out.write_all(segment.as_bytes())?;
            }
            if segments.peek().is_some() {
                self.out.write_all(b"\n")?;
                self.needs_indent = true;
            }
        }
        Ok(self)
    }

    /// Write text followed by a newline.
    pub fn println(&mut self, text: &str) -> io::Result<&mut Self> {
        self.print(text)?.newline()
    }

    /// Write a bare newline.
    pub fn newline(&mut self) -> io::Result<&mut Self> {
        self.out.write_all(b"\n")?;
        self.needs_indent = true;
        Ok(self)
    }

    /// Increase indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    ///
    /// # Panics
    ///
    /// Panics if the printer is already at indentation level zero; an
    /// unbalanced undent is a bug in the caller.
    pub fn undent(&mut self) -> &mut Self {
        assert!(
            self.indent_level > 0,
            "undent called at indentation level zero"
        );
        self.indent_level -= 1;
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    fn write_indent(&mut self) -> io::Result<()> {
        for _ in 0..self.indent_level {
            self.out.write_all(self.unit.as_bytes())?;
        }
        Ok(())
    }
}
