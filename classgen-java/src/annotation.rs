//! Javadoc comments and annotations attached to class members.
//!
//! Comments are collected line by line. A few doc tags are recognized on
//! the way in and turned into Java annotations printed after the comment.

use std::{
    collections::BTreeSet,
    io::{self, Write},
};

use classgen_core::Printer;

/// A Java annotation derived from a doc tag.
///
/// Variants are ordered the way they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Annotation {
    /// `@Deprecated`, from an `@deprecated` doc tag.
    Deprecated,
    /// `@android.annotation.SystemApi`, from a `@SystemApi` doc tag.
    SystemApi,
    /// `@android.annotation.TestApi`, from a `@TestApi` doc tag.
    TestApi,
}

impl Annotation {
    /// The annotation as written in Java source.
    pub fn as_java(&self) -> &'static str {
        match self {
            Self::Deprecated => "@Deprecated",
            Self::SystemApi => "@android.annotation.SystemApi",
            Self::TestApi => "@android.annotation.TestApi",
        }
    }
}

const DEPRECATED_TAG: &str = "@deprecated";

/// Doc tags stripped from the comment text and replaced by an annotation.
const API_TAGS: &[(&str, Annotation)] = &[
    ("@SystemApi", Annotation::SystemApi),
    ("@TestApi", Annotation::TestApi),
];

/// Builds a Javadoc comment and the annotations it implies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationProcessor {
    lines: Vec<String>,
    annotations: BTreeSet<Annotation>,
}

impl AnnotationProcessor {
    /// Create an empty processor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a possibly multi-line comment.
    ///
    /// Each line is trimmed; blank lines are skipped.
    pub fn append_comment(&mut self, comment: &str) -> &mut Self {
        for line in comment.lines() {
            let line = line.trim();
            if !line.is_empty() {
                self.append_comment_line(line);
            }
        }
        self
    }

    /// Append an empty comment line, if a comment has been started.
    pub fn append_new_line(&mut self) -> &mut Self {
        if self.has_comments() {
            self.lines.push(String::new());
        }
        self
    }

    /// Whether any comment text was collected.
    pub fn has_comments(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Whether the given annotation will be emitted.
    pub fn has_annotation(&self, annotation: Annotation) -> bool {
        self.annotations.contains(&annotation)
    }

    /// Print the comment block followed by one annotation per line.
    pub fn print<W: Write + ?Sized>(&self, printer: &mut Printer<'_, W>) -> io::Result<()> {
        if self.has_comments() {
            printer.println("/**")?;
            for line in &self.lines {
                if line.is_empty() {
                    printer.println(" *")?;
                } else {
                    printer.print(" * ")?.println(line)?;
                }
            }
            printer.println(" */")?;
        }

        for annotation in &self.annotations {
            printer.println(annotation.as_java())?;
        }
        Ok(())
    }

    fn append_comment_line(&mut self, line: &str) {
        // The deprecated tag stays in the comment; javadoc renders it.
        if line.contains(DEPRECATED_TAG) {
            self.annotations.insert(Annotation::Deprecated);
        }

        let mut line = line.to_string();
        for (tag, annotation) in API_TAGS {
            if let Some(idx) = line.find(tag) {
                line.replace_range(idx..idx + tag.len(), "");
                self.annotations.insert(*annotation);
            }
        }

        let line = line.trim();
        if !line.is_empty() {
            self.lines.push(line.to_string());
        }
    }
}
