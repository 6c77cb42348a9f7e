//! Java class definitions.

use std::io::{self, Write};

use classgen_core::Printer;
use indexmap::IndexMap;

use crate::{AnnotationProcessor, ClassMember, Member};

/// Whether a class is declared at top level or nested as `static`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassQualifier {
    /// A top-level class.
    #[default]
    None,
    /// A `static` nested class.
    Static,
}

/// Outcome of [`ClassDefinition::add_member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    /// No live member had this name.
    Added,
    /// A live member with the same name was replaced.
    Overridden,
}

/// A class holding an ordered set of uniquely named members.
///
/// Adding a member whose name is already taken replaces the old member
/// and moves the name to the end, so the replacement prints after every
/// other member that was present at the time. This order decides the
/// layout of the generated file.
///
/// # Example
///
/// ```
/// use classgen_java::{AddResult, ClassDefinition, ClassQualifier, MethodDefinition};
///
/// let mut class = ClassDefinition::new("R", ClassQualifier::None, false);
/// let first = class.add_member(MethodDefinition::new("foo", "void foo()"));
/// let second = class.add_member(MethodDefinition::new("foo", "int foo()"));
///
/// assert_eq!(first, AddResult::Added);
/// assert_eq!(second, AddResult::Overridden);
/// assert_eq!(class.member_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ClassDefinition {
    name: String,
    qualifier: ClassQualifier,
    create_if_empty: bool,
    members: IndexMap<String, ClassMember>,
    comment: AnnotationProcessor,
}

impl ClassDefinition {
    /// Create a class with no members.
    ///
    /// With `create_if_empty` unset, the class prints nothing until it
    /// holds a non-empty member.
    pub fn new(name: impl Into<String>, qualifier: ClassQualifier, create_if_empty: bool) -> Self {
        Self {
            name: name.into(),
            qualifier,
            create_if_empty,
            members: IndexMap::new(),
            comment: AnnotationProcessor::default(),
        }
    }

    /// Insert a member, replacing any live member with the same name.
    pub fn add_member(&mut self, member: impl Into<ClassMember>) -> AddResult {
        let member = member.into();
        let name = member.name().to_string();

        let result = if self.members.shift_remove(&name).is_some() {
            tracing::debug!(class = %self.name, member = %name, "member overridden");
            AddResult::Overridden
        } else {
            AddResult::Added
        };

        self.members.insert(name, member);
        result
    }

    pub fn qualifier(&self) -> ClassQualifier {
        self.qualifier
    }

    pub fn create_if_empty(&self) -> bool {
        self.create_if_empty
    }

    /// Number of live members, empty or not.
    ///
    /// Unlike [`Member::is_empty`], this counts nested classes that would
    /// print nothing.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Look up a live member by name.
    pub fn get(&self, name: &str) -> Option<&ClassMember> {
        self.members.get(name)
    }

    /// Iterate over live members in print order.
    pub fn members(&self) -> impl Iterator<Item = &ClassMember> {
        self.members.values()
    }

    /// Javadoc and annotations printed above the class declaration.
    pub fn comment_builder(&mut self) -> &mut AnnotationProcessor {
        &mut self.comment
    }
}

impl Member for ClassDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    /// A class is empty when it is not forced to print and none of its
    /// members would print anything.
    fn is_empty(&self) -> bool {
        !self.create_if_empty && self.members.values().all(Member::is_empty)
    }

    fn print<W: Write + ?Sized>(
        &self,
        use_final: bool,
        printer: &mut Printer<'_, W>,
    ) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        self.comment.print(printer)?;
        printer.print("public ")?;
        if self.qualifier == ClassQualifier::Static {
            printer.print("static ")?;
        }
        printer
            .print("final class ")?
            .print(&self.name)?
            .println(" {")?;
        printer.indent();

        for member in self.members.values() {
            member.print(use_final, printer)?;
            printer.newline()?;
        }

        printer.undent();
        printer.print("}")?;
        Ok(())
    }
}
