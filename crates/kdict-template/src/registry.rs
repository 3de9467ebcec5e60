//! Process-wide template registry
//!
//! Templates are built once on first use and never mutated. Lookups hand out
//! deep copies so documents never alias template defaults or each other.

use kdict_value::{Map, Value};
use once_cell::sync::Lazy;

use crate::catalog;
use crate::kind::TemplateKind;
use crate::TemplateError;

static REGISTRY: Lazy<Vec<Template>> =
    Lazy::new(|| TemplateKind::ALL.into_iter().map(Template::build).collect());

/// Immutable default document shape
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    kind: TemplateKind,
    root: Map,
}

impl Template {
    fn build(kind: TemplateKind) -> Self {
        let root = match Value::from(catalog::shape(kind)) {
            Value::Map(map) => map,
            _ => Map::new(),
        };
        Self { kind, root }
    }

    /// Registered template for `kind`
    #[must_use]
    pub fn of(kind: TemplateKind) -> &'static Self {
        &REGISTRY[kind.index()]
    }

    /// Identifier this template is registered under
    #[inline]
    #[must_use]
    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Borrow the default shape
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Map {
        &self.root
    }

    /// Fresh deep copy of the default shape
    #[inline]
    #[must_use]
    pub fn instantiate(&self) -> Map {
        self.root.clone()
    }
}

/// Fresh, independent copy of the named template
///
/// # Errors
/// Returns [`TemplateError::Unknown`] if `name` is not a registered identifier
pub fn get_template(name: &str) -> Result<Map, TemplateError> {
    let kind: TemplateKind = name.parse()?;
    Ok(Template::of(kind).instantiate())
}
