//! Constant fields: `int`, resource IDs, `String`, and resource ID arrays.

use std::{
    fmt,
    io::{self, Write},
};

use classgen_core::Printer;

use super::Member;
use crate::AnnotationProcessor;

/// Number of array elements printed per line.
const ELEMENTS_PER_LINE: usize = 4;

/// A resource identifier of the form `0xPPTTEEEE`
/// (package, type, entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub u32);

impl ResourceId {
    /// Assemble an ID from its package, type and entry parts.
    pub fn new(package_id: u8, type_id: u8, entry_id: u16) -> Self {
        Self((u32::from(package_id) << 24) | (u32::from(type_id) << 16) | u32::from(entry_id))
    }

    pub fn package_id(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn type_id(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn entry_id(&self) -> u16 {
        self.0 as u16
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// The value of a constant field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A plain `int`, printed in decimal.
    Int(i32),
    /// An `int` holding a resource ID, printed in hex.
    ResourceId(ResourceId),
    /// A `String`, printed verbatim between double quotes.
    String(String),
}

impl FieldValue {
    fn java_type(&self) -> &'static str {
        match self {
            Self::Int(_) | Self::ResourceId(_) => "int",
            Self::String(_) => "String",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::ResourceId(id) => write!(f, "{id}"),
            Self::String(s) => write!(f, "\"{s}\""),
        }
    }
}

/// A `public static` constant field.
///
/// Rendered as `final` only when the tree is printed with `use_final`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMember {
    name: String,
    value: FieldValue,
    comment: AnnotationProcessor,
}

impl FieldMember {
    pub fn new(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            value,
            comment: AnnotationProcessor::default(),
        }
    }

    pub fn int(name: impl Into<String>, value: i32) -> Self {
        Self::new(name, FieldValue::Int(value))
    }

    pub fn resource_id(name: impl Into<String>, id: impl Into<ResourceId>) -> Self {
        Self::new(name, FieldValue::ResourceId(id.into()))
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldValue::String(value.into()))
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Javadoc and annotations printed above the field.
    pub fn comment_builder(&mut self) -> &mut AnnotationProcessor {
        &mut self.comment
    }
}

impl Member for FieldMember {
    fn name(&self) -> &str {
        &self.name
    }

    fn print<W: Write + ?Sized>(
        &self,
        use_final: bool,
        printer: &mut Printer<'_, W>,
    ) -> io::Result<()> {
        self.comment.print(printer)?;
        printer.print("public static ")?;
        if use_final {
            printer.print("final ")?;
        }
        printer.print(&format!(
            "{} {}={};",
            self.value.java_type(),
            self.name,
            self.value
        ))?;
        Ok(())
    }
}

/// A `public static final int[]` of resource IDs, such as a styleable's
/// attribute list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceArrayMember {
    name: String,
    elements: Vec<ResourceId>,
    comment: AnnotationProcessor,
}

impl ResourceArrayMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_element(&mut self, id: impl Into<ResourceId>) -> &mut Self {
        self.elements.push(id.into());
        self
    }

    pub fn elements(&self) -> &[ResourceId] {
        &self.elements
    }

    /// Javadoc and annotations printed above the array.
    pub fn comment_builder(&mut self) -> &mut AnnotationProcessor {
        &mut self.comment
    }
}

impl Member for ResourceArrayMember {
    fn name(&self) -> &str {
        &self.name
    }

    // Arrays are always emitted final.
    fn print<W: Write + ?Sized>(
        &self,
        _use_final: bool,
        printer: &mut Printer<'_, W>,
    ) -> io::Result<()> {
        self.comment.print(printer)?;
        printer.print(&format!("public static final int[] {}={{", self.name))?;
        printer.indent();

        let last = self.elements.len().saturating_sub(1);
        for (i, element) in self.elements.iter().enumerate() {
            if i % ELEMENTS_PER_LINE == 0 {
                printer.newline()?;
            }
            printer.print(&element.to_string())?;
            if i < last {
                printer.print(", ")?;
            }
        }

        printer.newline()?;
        printer.undent();
        printer.print("};")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(member: &impl Member, use_final: bool) -> String {
        let mut out = Vec::new();
        member
            .print(use_final, &mut Printer::new(&mut out))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_resource_id_parts() {
        let id = ResourceId::new(0x7f, 0x01, 0x0002);
        assert_eq!(id, ResourceId(0x7f010002));
        assert_eq!(id.package_id(), 0x7f);
        assert_eq!(id.type_id(), 0x01);
        assert_eq!(id.entry_id(), 0x0002);
    }

    #[test]
    fn test_resource_id_display_is_zero_padded() {
        assert_eq!(ResourceId(0x7f010000).to_string(), "0x7f010000");
        assert_eq!(ResourceId(0x00010001).to_string(), "0x00010001");
    }

    #[test]
    fn test_resource_id_field() {
        let field = FieldMember::resource_id("icon", ResourceId(0x7f020000));
        assert_eq!(
            render(&field, true),
            "public static final int icon=0x7f020000;"
        );
        assert_eq!(render(&field, false), "public static int icon=0x7f020000;");
    }

    #[test]
    fn test_int_field() {
        let field = FieldMember::int("MyView_color", 3);
        assert_eq!(render(&field, true), "public static final int MyView_color=3;");
    }

    #[test]
    fn test_string_field() {
        let field = FieldMember::string("PACKAGE", "com.example");
        assert_eq!(
            render(&field, true),
            "public static final String PACKAGE=\"com.example\";"
        );
    }

    #[test]
    fn test_field_with_comment() {
        let mut field = FieldMember::resource_id("old", ResourceId(0x7f030001));
        field.comment_builder().append_comment("@deprecated use new");

        assert_eq!(
            render(&field, false),
            "/**\n * @deprecated use new\n */\n@Deprecated\npublic static int old=0x7f030001;"
        );
    }

    #[test]
    fn test_array_wraps_every_four_elements() {
        let mut array = ResourceArrayMember::new("MyView");
        for id in 0x7f010000..0x7f010005u32 {
            array.add_element(id);
        }

        assert_eq!(
            render(&array, false),
            "public static final int[] MyView={\n  \
             0x7f010000, 0x7f010001, 0x7f010002, 0x7f010003, \n  \
             0x7f010004\n\
             };"
        );
    }

    #[test]
    fn test_array_single_element() {
        let mut array = ResourceArrayMember::new("One");
        array.add_element(ResourceId(0x01010000));
        assert_eq!(
            render(&array, true),
            "public static final int[] One={\n  0x01010000\n};"
        );
    }

    #[test]
    fn test_empty_array() {
        let array = ResourceArrayMember::new("None");
        assert!(!array.is_empty());
        assert_eq!(render(&array, true), "public static final int[] None={\n};");
    }
}
