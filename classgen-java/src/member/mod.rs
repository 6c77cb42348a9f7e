//! Members that make up a Java class.
//!
//! Every member kind implements [`Member`]; a class stores them as the
//! closed [`ClassMember`] enum.

mod field;
mod method;

use std::io::{self, Write};

use classgen_core::Printer;
pub use field::{FieldMember, FieldValue, ResourceArrayMember, ResourceId};
pub use method::MethodDefinition;

use crate::ClassDefinition;

/// Capabilities shared by all class members.
pub trait Member {
    /// Name used as the override key inside the containing class.
    fn name(&self) -> &str;

    /// Whether the member has nothing to print.
    fn is_empty(&self) -> bool {
        false
    }

    /// Print the member without a trailing newline.
    ///
    /// `use_final` is threaded through the whole tree; member kinds that
    /// have no use for it ignore it.
    fn print<W: Write + ?Sized>(
        &self,
        use_final: bool,
        printer: &mut Printer<'_, W>,
    ) -> io::Result<()>;
}

/// A member stored in a [`ClassDefinition`].
#[derive(Debug, Clone)]
pub enum ClassMember {
    Method(MethodDefinition),
    Class(ClassDefinition),
    Field(FieldMember),
    ResourceArray(ResourceArrayMember),
}

impl Member for ClassMember {
    fn name(&self) -> &str {
        match self {
            Self::Method(m) => m.name(),
            Self::Class(c) => c.name(),
            Self::Field(f) => f.name(),
            Self::ResourceArray(a) => a.name(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Method(m) => m.is_empty(),
            Self::Class(c) => c.is_empty(),
            Self::Field(f) => f.is_empty(),
            Self::ResourceArray(a) => a.is_empty(),
        }
    }

    fn print<W: Write + ?Sized>(
        &self,
        use_final: bool,
        printer: &mut Printer<'_, W>,
    ) -> io::Result<()> {
        match self {
            Self::Method(m) => m.print(use_final, printer),
            Self::Class(c) => c.print(use_final, printer),
            Self::Field(f) => f.print(use_final, printer),
            Self::ResourceArray(a) => a.print(use_final, printer),
        }
    }
}

impl From<MethodDefinition> for ClassMember {
    fn from(method: MethodDefinition) -> Self {
        Self::Method(method)
    }
}

impl From<ClassDefinition> for ClassMember {
    fn from(class: ClassDefinition) -> Self {
        Self::Class(class)
    }
}

impl From<FieldMember> for ClassMember {
    fn from(field: FieldMember) -> Self {
        Self::Field(field)
    }
}

impl From<ResourceArrayMember> for ClassMember {
    fn from(array: ResourceArrayMember) -> Self {
        Self::ResourceArray(array)
    }
}
