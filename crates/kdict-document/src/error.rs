//! Error types for documents
//!
//! Covers:
//! - Template lookup (unknown identifier)
//! - Format selection (anything but JSON/YAML)
//! - Parsing file content
//! - Filesystem reads and writes

use std::path::PathBuf;

use kdict_template::TemplateError;

use crate::format::Format;

/// Errors during document construction, serialization and persistence
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Template identifier not in the registry
    #[error(transparent)]
    UnknownTemplate(#[from] TemplateError),

    /// Serialization format outside {json, yaml}
    #[error("unsupported format: '{0}' (choose from: json, yaml)")]
    UnsupportedFormat(String),

    /// Content is not valid syntax for the declared format
    #[error("{format} parse error in {origin}: {message}")]
    Parse {
        /// Format the text was parsed as
        format: Format,
        /// File path, or `<input>` for in-memory text
        origin: String,
        /// Parser diagnostic
        message: String,
    },

    /// Filesystem failure
    #[error("io error on {}: {source}", .path.display())]
    Io {
        /// File that was read or written
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Encoder failure
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Parsed content is valid but its root is not a mapping
    #[error("expected a mapping at document root, got {0}")]
    NotAMapping(&'static str),
}

impl DocumentError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create parse error for the named origin (file path or `<input>`)
    pub fn parse_error(format: Format, origin: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            format,
            origin: origin.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;
