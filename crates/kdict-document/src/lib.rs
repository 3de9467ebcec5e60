//! kdict Documents
//!
//! Template-seeded metadata documents with deep-merge updates and JSON/YAML
//! round-tripping.
//!
//! # Core Operations
//!
//! - **Construct**: seed a [`Document`] from a registered template
//! - **Update**: deep-merge partial mappings without losing template defaults
//! - **Address**: read and write nested values by [`DottedPath`]
//! - **Persist**: normalize and [`save`]; [`load`] and infer the template back
//!
//! # Architecture
//!
//! ```text
//! Template Registry → Document ⇄ update / set → normalize → Format → File System
//!                        ↑__________________ infer template ______________↓
//! ```
//!
//! # Example
//!
//! ```
//! use kdict_document::prelude::*;
//!
//! # fn example() -> Result<(), DocumentError> {
//! let mut sample = Document::construct("sample", None)?;
//! sample.set("material.crystal_structure.spacegroup_number", 225);
//! sample.set("material.crystal_structure.spacegroup_symbol", "Fm-3m");
//!
//! assert_eq!(sample["material.crystal_structure.spacegroup_number"], Value::Int(225));
//! assert!(sample.get("atom_attribute.position").is_some());
//!
//! let yaml = sample.to_serialized(Format::Yaml, None)?;
//! assert!(yaml.contains("spacegroup_symbol: Fm-3m"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod document;
pub mod error;
mod format;
mod io;
mod merge;
mod path;

pub use document::Document;
pub use error::{DocumentError, Result};
pub use format::Format;
pub use io::{load, save};
pub use merge::deep_merge;
pub use path::DottedPath;

pub use kdict_template::{
    generate_id, generate_id_with, get_template, Template, TemplateError, TemplateKind, DEFAULT_ID_LENGTH,
};
pub use kdict_value::{normalize, JsonValue, Map, NumericArray, Scalar, Value};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with documents
    pub use crate::document::Document;
    pub use crate::error::DocumentError;
    pub use crate::format::Format;
    pub use crate::path::DottedPath;
    pub use kdict_template::TemplateKind;
    pub use kdict_value::{Map, NumericArray, Scalar, Value};
}
