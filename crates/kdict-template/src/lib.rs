//! kdict Templates
//!
//! Fixed catalog of default document shapes for materials-science metadata.
//!
//! # Core Concepts
//!
//! - [`TemplateKind`]: Registered template identifier (`sample`, `workflow`, ...)
//! - [`Template`]: Immutable default shape, built once per process
//! - [`get_template`]: Fresh deep copy of a template by name
//! - [`generate_id`]: Random alphanumeric record identifiers
//!
//! # Example
//!
//! ```
//! use kdict_template::{get_template, TemplateError};
//!
//! let sample = get_template("sample")?;
//! assert!(sample.contains_key("material"));
//!
//! assert!(matches!(get_template("crystal"), Err(TemplateError::Unknown { .. })));
//! # Ok::<(), TemplateError>(())
//! ```

#![warn(unreachable_pub)]

mod catalog;
mod id;
mod kind;
mod registry;

pub use id::{generate_id, generate_id_with, DEFAULT_ID_LENGTH};
pub use kind::TemplateKind;
pub use registry::{get_template, Template};

/// Errors related to template lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// Identifier is not registered
    #[error("unknown template: '{name}' (choose from: {valid})")]
    Unknown {
        /// Identifier that was requested
        name: String,
        /// Comma-separated registered identifiers
        valid: String,
    },
}

impl TemplateError {
    /// Create unknown-template error listing every registered identifier
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown {
            name: name.into(),
            valid: TemplateKind::ALL
                .into_iter()
                .map(TemplateKind::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
