//! Format-name entry points for persistence
//!
//! The format is validated before the filesystem is touched, so an
//! unsupported name never creates or truncates a file.

use std::path::Path;

use crate::document::Document;
use crate::error::Result;
use crate::format::Format;

/// Save `document` to `path` in the named format
///
/// # Errors
/// Returns [`DocumentError::UnsupportedFormat`](crate::DocumentError::UnsupportedFormat)
/// for any name other than `json`/`yaml`, or an IO error on write failure
pub fn save(document: &Document, path: impl AsRef<Path>, format: &str, indent: Option<usize>) -> Result<()> {
    let format: Format = format.parse()?;
    document.save(path, format, indent)
}

/// Load a document from `path` in the named format, inferring its template
///
/// # Errors
/// Returns [`DocumentError::UnsupportedFormat`](crate::DocumentError::UnsupportedFormat)
/// for any name other than `json`/`yaml`, an IO error if the file cannot be
/// read, or a parse error for invalid content
pub fn load(path: impl AsRef<Path>, format: &str) -> Result<Document> {
    let format: Format = format.parse()?;
    Document::load(path, format)
}
