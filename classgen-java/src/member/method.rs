use std::io::{self, Write};

use classgen_core::Printer;

use super::Member;

/// A method with a verbatim signature and body statements.
///
/// The name is only the override key; the signature carries everything
/// that is rendered before the opening brace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    name: String,
    signature: String,
    statements: Vec<String>,
}

impl MethodDefinition {
    /// Create a method with an empty body.
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            statements: Vec::new(),
        }
    }

    /// Append one line of method body source.
    pub fn append_statement(&mut self, statement: impl Into<String>) -> &mut Self {
        self.statements.push(statement.into());
        self
    }

    /// Get the signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Get the body statements in order.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }
}

impl Member for MethodDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn print<W: Write + ?Sized>(
        &self,
        _use_final: bool,
        printer: &mut Printer<'_, W>,
    ) -> io::Result<()> {
        printer.print(&self.signature)?.println(" {")?;
        printer.indent();
        for statement in &self.statements {
            printer.println(statement)?;
        }
        printer.undent();
        printer.print("}")?;
        Ok(())
    }
}
