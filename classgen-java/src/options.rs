//! Generator options.
//!
//! Options are usually built in code, but can also be read from a small
//! TOML file:
//!
//! ```toml
//! use_final = false
//! indent = { spaces = 4 }
//! ```

use std::{path::Path, str::FromStr};

use classgen_core::Indent;
use serde::Deserialize;

use crate::{Error, Result};

/// Options controlling how a class tree is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Emit constant fields as `final`.
    pub use_final: bool,
    /// Indentation unit per nesting level.
    pub indent: Indent,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            use_final: true,
            indent: Indent::JAVA,
        }
    }
}

impl GeneratorOptions {
    /// Load options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse options from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Set whether constant fields are emitted as `final`.
    pub fn use_final(mut self, use_final: bool) -> Self {
        self.use_final = use_final;
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

impl FromStr for GeneratorOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "classgen.toml")
    }
}
