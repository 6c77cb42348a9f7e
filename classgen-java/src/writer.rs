//! Java source file output.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use classgen_core::{GeneratedFile, Printer, package_path};
use eyre::Result;

use crate::{ClassDefinition, GeneratorOptions, Member};

/// Comment written at the top of every generated file.
///
/// Kept byte-for-byte stable so generated files diff cleanly.
pub const WARNING_HEADER: &str = "/* AUTO-GENERATED FILE. DO NOT MODIFY.\n \
                                  *\n \
                                  * This class was automatically generated by the\n \
                                  * aapt tool from the resource data it found. It\n \
                                  * should not be modified by hand.\n \
                                  */\n\n";

/// Write `def` as a complete Java source file in `package`.
///
/// Emits the warning header, the package declaration, and the class
/// tree. Neither the package name nor the tree is validated. The sink is
/// only written to; flushing and closing it is up to the caller.
pub fn write_java_file<W: Write + ?Sized>(
    def: &ClassDefinition,
    package: &str,
    use_final: bool,
    out: &mut W,
) -> io::Result<()> {
    let options = GeneratorOptions::default().use_final(use_final);
    write_with_options(def, package, &options, out)
}

/// Like [`write_java_file`], with the final flag and indentation taken
/// from `options`.
pub fn write_with_options<W: Write + ?Sized>(
    def: &ClassDefinition,
    package: &str,
    options: &GeneratorOptions,
    out: &mut W,
) -> io::Result<()> {
    let mut printer = Printer::with_indent(out, options.indent);
    printer
        .print(WARNING_HEADER)?
        .print("package ")?
        .print(package)?
        .println(";")?;
    printer.newline()?;
    def.print(options.use_final, &mut printer)
}

/// A class tree bound to its package, written to
/// `<base>/<package dirs>/<ClassName>.java`.
#[derive(Debug, Clone)]
pub struct JavaFile<'a> {
    root: &'a ClassDefinition,
    package: String,
    options: GeneratorOptions,
}

impl<'a> JavaFile<'a> {
    pub fn new(root: &'a ClassDefinition, package: impl Into<String>) -> Self {
        Self {
            root,
            package: package.into(),
            options: GeneratorOptions::default(),
        }
    }

    /// Set the options used when rendering.
    pub fn options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }
}

impl GeneratedFile for JavaFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(package_path(&self.package))
            .join(format!("{}.java", self.root.name()))
    }

    fn render(&self) -> Result<String> {
        let mut out = Vec::new();
        write_with_options(self.root, &self.package, &self.options, &mut out)?;
        Ok(String::from_utf8(out)?)
    }
}
