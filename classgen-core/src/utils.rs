//! Shared utility functions for code generation.

use std::path::PathBuf;

/// Convert a dotted package name to a relative directory path
/// (e.g., "com.example.app" -> "com/example/app")
pub fn package_path(package: &str) -> PathBuf {
    package.split('.').filter(|part| !part.is_empty()).collect()
}
