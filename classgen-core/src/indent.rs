//! Indentation configuration for generated sources.

use std::borrow::Cow;

use serde::Deserialize;

/// Indentation style for generated code.
///
/// Deserializes from `"tab"` or `{ spaces = N }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the unit generated Java classes have always used.
    pub const JAVA: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(2) => Cow::Borrowed("  "),
            Self::Spaces(4) => Cow::Borrowed("    "),
            Self::Spaces(n) => Cow::Owned(" ".repeat(usize::from(*n))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
