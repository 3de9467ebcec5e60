//! Template-seeded document container
//!
//! A [`Document`] owns a deep copy of its template and accepts partial
//! updates, dotted-path reads and writes, and conversion to plain or
//! normalized data.

use std::fmt::{self, Display, Formatter};
use std::ops::Index;
use std::path::Path;

use kdict_template::{Template, TemplateKind};
use kdict_value::{JsonValue, Map, Value};

use crate::error::{DocumentError, Result};
use crate::format::Format;
use crate::merge::deep_merge;
use crate::path::DottedPath;

static NULL: Value = Value::Null;

/// Mutable metadata record seeded from a template
///
/// # Invariants
/// - Top-level keys are a superset of the template's top-level keys
/// - No structure is shared with the template or other documents
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    template: TemplateKind,
    data: Map,
}

impl Document {
    /// Create document holding a fresh copy of the template
    #[must_use]
    pub fn new(template: TemplateKind) -> Self {
        tracing::debug!(%template, "seeding document");
        Self {
            template,
            data: Template::of(template).instantiate(),
        }
    }

    /// Create document and merge `data` into the template
    #[must_use]
    pub fn with_data(template: TemplateKind, data: Map) -> Self {
        let mut document = Self::new(template);
        document.update(data);
        document
    }

    /// Create document from a template identifier and optional initial data
    ///
    /// # Errors
    /// Returns [`DocumentError::UnknownTemplate`] if `template` is not registered
    pub fn construct(template: &str, initial: Option<Map>) -> Result<Self> {
        let kind: TemplateKind = template.parse()?;
        Ok(match initial {
            Some(data) => Self::with_data(kind, data),
            None => Self::new(kind),
        })
    }

    /// Create document from a plain mapping
    ///
    /// # Errors
    /// Returns [`DocumentError::UnknownTemplate`] if `template` is not registered
    pub fn from_mapping(data: Map, template: &str) -> Result<Self> {
        Self::construct(template, Some(data))
    }

    /// Create document from any value
    ///
    /// # Errors
    /// Returns [`DocumentError::NotAMapping`] unless `value` is a mapping
    pub fn from_value(value: Value, template: TemplateKind) -> Result<Self> {
        match value {
            Value::Map(data) => Ok(Self::with_data(template, data)),
            other => Err(DocumentError::NotAMapping(other.kind())),
        }
    }

    /// Template this document was seeded from
    #[inline]
    #[must_use]
    pub fn template(&self) -> TemplateKind {
        self.template
    }

    /// Deep-merge a partial mapping into the document
    ///
    /// Mappings merge key by key; any other value, sequences included,
    /// replaces what was there.
    pub fn update(&mut self, partial: Map) {
        tracing::debug!(template = %self.template, keys = partial.len(), "merging update");
        deep_merge(&mut self.data, partial);
    }

    /// Value at a dotted path, `None` if any segment is missing
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.get_at(&DottedPath::from(path))
    }

    /// Value at a dotted path, or `default`
    #[must_use]
    pub fn get_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.get(path).unwrap_or(default)
    }

    /// Value at a parsed path
    #[must_use]
    pub fn get_at(&self, path: &DottedPath) -> Option<&Value> {
        let mut segments = path.iter();
        let mut current = self.data.get(segments.next()?)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// Assign `value` at a dotted path
    ///
    /// Missing intermediates become empty mappings; an intermediate that holds
    /// anything other than a mapping is replaced by one.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        self.set_at(&DottedPath::from(path), value.into());
    }

    /// Assign `value` at a parsed path
    pub fn set_at(&mut self, path: &DottedPath, value: Value) {
        tracing::debug!(%path, kind = value.kind(), "setting value");
        let (last, parents) = path.split_last();
        let mut current = &mut self.data;
        for segment in parents {
            current = descend(current, segment);
        }
        current.insert(last.to_owned(), value);
    }

    /// Borrow the underlying mapping
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &Map {
        &self.data
    }

    /// Deep copy as a plain mapping, without normalization
    #[inline]
    #[must_use]
    pub fn to_mapping(&self) -> Map {
        self.data.clone()
    }

    /// Consume into the underlying mapping
    #[inline]
    #[must_use]
    pub fn into_mapping(self) -> Map {
        self.data
    }

    /// Canonical serializable form of the document
    #[must_use]
    pub fn normalized(&self) -> JsonValue {
        JsonValue::Object(kdict_value::normalize_map(&self.data))
    }

    /// Normalize and render in `format`
    ///
    /// # Errors
    /// Returns [`DocumentError::Serialization`] if the encoder fails
    pub fn to_serialized(&self, format: Format, indent: Option<usize>) -> Result<String> {
        format.render(&self.normalized(), indent)
    }

    /// Normalize and render as JSON
    ///
    /// # Errors
    /// Returns [`DocumentError::Serialization`] if the encoder fails
    pub fn to_json(&self, indent: Option<usize>) -> Result<String> {
        self.to_serialized(Format::Json, indent)
    }

    /// Normalize and render as YAML
    ///
    /// # Errors
    /// Returns [`DocumentError::Serialization`] if the encoder fails
    pub fn to_yaml(&self) -> Result<String> {
        self.to_serialized(Format::Yaml, None)
    }

    /// Parse text, inferring the template from its top-level keys
    ///
    /// # Errors
    /// Returns [`DocumentError::Parse`] for invalid text and
    /// [`DocumentError::NotAMapping`] if the root is not a mapping
    pub fn from_text(text: &str, format: Format) -> Result<Self> {
        Self::parse_inferred(text, format, "<input>")
    }

    /// Save the normalized document to `path`
    ///
    /// Not atomic: a failed write may leave a truncated file.
    ///
    /// # Errors
    /// Returns [`DocumentError::Io`] if the file cannot be written
    pub fn save(&self, path: impl AsRef<Path>, format: Format, indent: Option<usize>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_serialized(format, indent)?;
        std::fs::write(path, text).map_err(|e| DocumentError::io_error(path, e))?;
        tracing::info!(path = %path.display(), %format, template = %self.template, "saved document");
        Ok(())
    }

    /// Load a document, inferring its template
    ///
    /// `metadata` + `schema` + `provenance` loads as `extended`,
    /// `metadata` + `schema` as `knowledge`, anything else as `minimal`.
    ///
    /// # Errors
    /// Returns [`DocumentError::Io`] if the file cannot be read,
    /// [`DocumentError::Parse`] for invalid content
    pub fn load(path: impl AsRef<Path>, format: Format) -> Result<Self> {
        let path = path.as_ref();
        let text = read(path)?;
        let document = Self::parse_inferred(&text, format, &path.display().to_string())?;
        tracing::info!(path = %path.display(), %format, template = %document.template, "loaded document");
        Ok(document)
    }

    /// Load a document into an explicitly chosen template
    ///
    /// # Errors
    /// Same as [`Document::load`]
    pub fn load_with_template(path: impl AsRef<Path>, format: Format, template: TemplateKind) -> Result<Self> {
        let path = path.as_ref();
        let text = read(path)?;
        let raw = format.parse(&text, &path.display().to_string())?;
        let document = Self::from_value(Value::from(raw), template)?;
        tracing::info!(path = %path.display(), %format, %template, "loaded document");
        Ok(document)
    }

    /// Template whose shape `data` most resembles
    #[must_use]
    pub fn infer_template(data: &Map) -> TemplateKind {
        if data.contains_key("metadata") && data.contains_key("schema") {
            if data.contains_key("provenance") {
                TemplateKind::Extended
            } else {
                TemplateKind::Knowledge
            }
        } else {
            TemplateKind::Minimal
        }
    }

    fn parse_inferred(text: &str, format: Format, origin: &str) -> Result<Self> {
        match Value::from(format.parse(text, origin)?) {
            Value::Map(data) => {
                let template = Self::infer_template(&data);
                tracing::debug!(%template, origin, "inferred template");
                Ok(Self::with_data(template, data))
            }
            other => Err(DocumentError::NotAMapping(other.kind())),
        }
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| DocumentError::io_error(path, e))
}

/// Child mapping under `key`, created or replaced as needed
fn descend<'a>(map: &'a mut Map, key: &str) -> &'a mut Map {
    let slot = map.entry(key.to_owned()).or_insert_with(Value::map);
    if !slot.is_map() {
        *slot = Value::map();
    }
    match slot {
        Value::Map(child) => child,
        _ => unreachable!("slot was just set to a mapping"),
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(TemplateKind::default())
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = self.to_json(Some(2)).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Dictionary-style read access; missing paths read as `Null`
impl Index<&str> for Document {
    type Output = Value;

    fn index(&self, path: &str) -> &Value {
        self.get(path).unwrap_or(&NULL)
    }
}

impl From<Document> for Map {
    fn from(document: Document) -> Self {
        document.data
    }
}

/// Normalized view of a whole document
impl From<&Document> for JsonValue {
    fn from(document: &Document) -> Self {
        document.normalized()
    }
}
