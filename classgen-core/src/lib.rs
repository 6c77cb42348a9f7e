//! Core utilities for the classgen Java source generator.
//!
//! This crate provides the language-agnostic pieces the Java model is
//! rendered through: the indentation-aware [`Printer`], the [`Indent`]
//! unit configuration, and the [`GeneratedFile`] abstraction for writing
//! rendered output to disk.

mod file;
mod indent;
mod printer;
mod utils;

pub use file::GeneratedFile;
pub use indent::Indent;
pub use printer::Printer;
pub use utils::package_path;
