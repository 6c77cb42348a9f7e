//! Java class model and source writer.
//!
//! A caller assembles a [`ClassDefinition`] tree incrementally (nested
//! classes, methods, constant fields) and renders it with
//! [`write_java_file`] into a deterministic, indented Java source file.
//!
//! # Module Organization
//!
//! - [`member`] - Member kinds ([`MethodDefinition`], [`FieldMember`], ...)
//!   and the [`Member`] capability trait
//! - [`class`] - [`ClassDefinition`] with name-keyed override semantics
//! - [`annotation`] - Javadoc comment and annotation processing
//! - [`writer`] - File entry points ([`write_java_file`], [`JavaFile`])
//! - [`options`] - [`GeneratorOptions`] loaded from TOML

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod annotation;
pub mod class;
mod error;
pub mod member;
pub mod options;
pub mod writer;

pub use annotation::{Annotation, AnnotationProcessor};
pub use class::{AddResult, ClassDefinition, ClassQualifier};
pub use error::{Error, Result};
pub use member::{
    ClassMember, FieldMember, FieldValue, Member, MethodDefinition, ResourceArrayMember,
    ResourceId,
};
pub use options::GeneratorOptions;
pub use writer::{JavaFile, WARNING_HEADER, write_java_file, write_with_options};
