//! Text formats
//!
//! JSON via `serde_json`, YAML via `serde_yaml`. Both keep mapping key order
//! and neither emits custom tags.

use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value as JsonValue;

use crate::error::{DocumentError, Result};

/// Supported serialization format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON text
    #[default]
    Json,
    /// YAML block style
    Yaml,
}

impl Format {
    /// Every supported format
    pub const ALL: [Self; 2] = [Self::Json, Self::Yaml];

    /// Format name (`json`, `yaml`)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Infer format from a file extension (`.json`, `.yaml`, `.yml`)
    ///
    /// # Errors
    /// Returns [`DocumentError::UnsupportedFormat`] for any other extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match ext {
            "yml" => Ok(Self::Yaml),
            other => other.parse(),
        }
    }

    /// Render a normalized value
    ///
    /// `indent` applies to JSON only: `None` is compact, `Some(n)` pretty-prints
    /// with `n` spaces. YAML is always block style.
    ///
    /// # Errors
    /// Returns [`DocumentError::Serialization`] if the encoder fails
    pub fn render(self, value: &JsonValue, indent: Option<usize>) -> Result<String> {
        match self {
            Self::Json => render_json(value, indent),
            Self::Yaml => serde_yaml::to_string(value)
                .map_err(|e| DocumentError::Serialization(e.to_string())),
        }
    }

    /// Parse text into raw structured data
    ///
    /// # Errors
    /// Returns [`DocumentError::Parse`] if `text` is not valid for this format
    pub fn parse(self, text: &str, origin: &str) -> Result<JsonValue> {
        match self {
            Self::Json => serde_json::from_str(text)
                .map_err(|e| DocumentError::parse_error(self, origin, e)),
            Self::Yaml => serde_yaml::from_str(text)
                .map_err(|e| DocumentError::parse_error(self, origin, e)),
        }
    }
}

fn render_json(value: &JsonValue, indent: Option<usize>) -> Result<String> {
    let Some(width) = indent else {
        return serde_json::to_string(value).map_err(|e| DocumentError::Serialization(e.to_string()));
    };

    let spaces = vec![b' '; width];
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&spaces));
    value
        .serialize(&mut ser)
        .map_err(|e| DocumentError::Serialization(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| DocumentError::Serialization(e.to_string()))
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| DocumentError::UnsupportedFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_format_names() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("yaml".parse::<Format>().unwrap(), Format::Yaml);
        assert!(matches!(
            "xml".parse::<Format>(),
            Err(DocumentError::UnsupportedFormat(name)) if name == "xml"
        ));
    }

    #[test]
    fn format_from_path() {
        assert_eq!(Format::from_path(Path::new("a/b.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("b.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("b.yml")).unwrap(), Format::Yaml);
        assert!(Format::from_path(Path::new("b.xml")).is_err());
        assert!(Format::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn json_compact_and_indented() {
        let value = json!({"a": [1, 2]});
        assert_eq!(Format::Json.render(&value, None).unwrap(), r#"{"a":[1,2]}"#);
        assert_eq!(
            Format::Json.render(&value, Some(2)).unwrap(),
            "{\n  \"a\": [\n    1,\n    2\n  ]\n}"
        );
        assert_eq!(
            Format::Json.render(&json!({"a": 1}), Some(4)).unwrap(),
            "{\n    \"a\": 1\n}"
        );
    }

    #[test]
    fn yaml_is_block_style_and_ordered() {
        let value = json!({"zeta": 1, "alpha": {"tags": ["x"]}});
        let text = Format::Yaml.render(&value, Some(2)).unwrap();
        assert_eq!(text, "zeta: 1\nalpha:\n  tags:\n  - x\n");
    }

    #[test]
    fn yaml_keeps_unicode() {
        let text = Format::Yaml.render(&json!({"author": "Ångström"}), None).unwrap();
        assert!(text.contains("Ångström"));
    }

    #[test]
    fn parse_invalid_json() {
        let err = Format::Json.parse(r#"{"a": }"#, "<input>").unwrap_err();
        assert!(matches!(err, DocumentError::Parse { format: Format::Json, .. }));
    }

    #[test]
    fn parse_invalid_yaml() {
        let err = Format::Yaml.parse("a: [1, 2", "<input>").unwrap_err();
        assert!(matches!(err, DocumentError::Parse { format: Format::Yaml, .. }));
    }

    #[test]
    fn parse_yaml_preserves_order() {
        let value = Format::Yaml.parse("b: 1\na: 2\n", "<input>").unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
