//! Subcommand implementations
//!
//! Each operation returns its output as a value so `main` owns all printing.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use kdict_document::{
    generate_id, get_template, normalize, Document, DocumentError, Format, JsonValue, Map, TemplateKind, Value,
};

use crate::config::CliConfig;

/// Options for `kdict new`
#[derive(Debug, Default)]
pub(crate) struct NewDocument {
    pub(crate) template: Option<TemplateKind>,
    pub(crate) data: Option<PathBuf>,
    pub(crate) assignments: Vec<String>,
    pub(crate) generate_id: bool,
}

pub(crate) struct Session {
    config: CliConfig,
}

impl Session {
    pub(crate) fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Explicit format, then the file extension, then the configured default
    pub(crate) fn format_for(&self, explicit: Option<Format>, path: &Path) -> anyhow::Result<Format> {
        if let Some(format) = explicit {
            return Ok(format);
        }
        if path.extension().is_none() {
            return self.config.format();
        }
        Ok(Format::from_path(path)?)
    }

    pub(crate) fn open(
        &self,
        path: &Path,
        format: Option<Format>,
        template: Option<TemplateKind>,
    ) -> anyhow::Result<(Document, Format)> {
        let format = self.format_for(format, path)?;
        let document = match template {
            Some(template) => Document::load_with_template(path, format, template),
            None => Document::load(path, format),
        }
        .with_context(|| format!("failed to open {}", path.display()))?;
        Ok((document, format))
    }

    /// Write to `out`, or return the rendered text for stdout
    pub(crate) fn emit(
        &self,
        document: &Document,
        out: Option<&Path>,
        format: Option<Format>,
    ) -> anyhow::Result<Option<String>> {
        let indent = self.config.indent();
        match out {
            Some(path) => {
                let format = self.format_for(format, path)?;
                document.save(path, format, indent)?;
                Ok(None)
            }
            None => {
                let format = match format {
                    Some(format) => format,
                    None => self.config.format()?,
                };
                Ok(Some(document.to_serialized(format, indent)?))
            }
        }
    }

    /// Template names, or one template's default shape
    pub(crate) fn templates(&self, name: Option<TemplateKind>) -> anyhow::Result<String> {
        let Some(kind) = name else {
            return Ok(TemplateKind::ALL
                .into_iter()
                .map(TemplateKind::as_str)
                .collect::<Vec<_>>()
                .join("\n"));
        };
        let shape = get_template(kind.as_str())?;
        Ok(Format::Json.render(&normalize(&Value::Map(shape)), self.config.indent())?)
    }

    pub(crate) fn create(&self, options: NewDocument) -> anyhow::Result<Document> {
        let template = match options.template {
            Some(template) => template,
            None => self.config.template()?,
        };
        let initial = options
            .data
            .as_deref()
            .map(|path| self.read_mapping(path))
            .transpose()?;

        let mut document = Document::construct(template.as_str(), initial)?;
        if options.generate_id {
            document.set("id", generate_id(self.config.id_length));
        }
        for assignment in &options.assignments {
            let (path, value) = parse_assignment(assignment)?;
            document.set(path, value);
        }
        tracing::debug!(%template, keys = document.as_map().len(), "created document");
        Ok(document)
    }

    /// Value at `path` as JSON; strings print bare
    pub(crate) fn get(&self, document: &Document, path: &str) -> anyhow::Result<String> {
        let Some(value) = document.get(path) else {
            bail!("no value at '{path}'");
        };
        match normalize(value) {
            JsonValue::String(text) => Ok(text),
            other => Ok(Format::Json.render(&other, self.config.indent())?),
        }
    }

    /// Set one value and save the file in place
    pub(crate) fn set(
        &self,
        file: &Path,
        format: Option<Format>,
        template: Option<TemplateKind>,
        path: &str,
        raw: &str,
    ) -> anyhow::Result<()> {
        let (mut document, format) = self.open(file, format, template)?;
        document.set(path, parse_value(raw));
        document.save(file, format, self.config.indent())?;
        Ok(())
    }

    /// Deep-merge the mapping in `patch` into `file`, writing to `out` or in place
    pub(crate) fn merge(
        &self,
        file: &Path,
        patch: &Path,
        out: Option<&Path>,
        template: Option<TemplateKind>,
    ) -> anyhow::Result<()> {
        let (mut document, format) = self.open(file, None, template)?;
        document.update(self.read_mapping(patch)?);
        let target = out.unwrap_or(file);
        let format = if out.is_some() { self.format_for(None, target)? } else { format };
        document.save(target, format, self.config.indent())?;
        Ok(())
    }

    pub(crate) fn convert(
        &self,
        input: &Path,
        output: &Path,
        template: Option<TemplateKind>,
    ) -> anyhow::Result<()> {
        let (document, _) = self.open(input, None, template)?;
        let format = self.format_for(None, output)?;
        document.save(output, format, self.config.indent())?;
        Ok(())
    }

    pub(crate) fn id(&self, length: Option<usize>) -> String {
        generate_id(length.unwrap_or(self.config.id_length))
    }

    fn read_mapping(&self, path: &Path) -> anyhow::Result<Map> {
        let format = self.format_for(None, path)?;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match Value::from(format.parse(&text, &path.display().to_string())?) {
            Value::Map(map) => Ok(map),
            other => Err(DocumentError::NotAMapping(other.kind()).into()),
        }
    }
}

/// Split `path=value`, parsing the value with [`parse_value`]
pub(crate) fn parse_assignment(assignment: &str) -> anyhow::Result<(&str, Value)> {
    match assignment.split_once('=') {
        Some((path, raw)) => Ok((path, parse_value(raw))),
        None => bail!("expected PATH=VALUE, got '{assignment}'"),
    }
}

/// JSON literal if it parses as one, otherwise the raw string
pub(crate) fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<JsonValue>(raw).map_or_else(|_| Value::from(raw), Value::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kdict_test_utils::{copper_sample, mapping, Scratch};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn session() -> Session {
        Session::new(CliConfig::default())
    }

    #[test]
    fn values_parse_as_json_first() {
        assert_eq!(parse_value("225"), Value::Int(225));
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("[1, 2]"), Value::from(json!([1, 2])));
        assert_eq!(parse_value("\"quoted\""), Value::from("quoted"));
        assert_eq!(parse_value("Fm-3m"), Value::from("Fm-3m"));
    }

    #[test]
    fn assignment_needs_equals() {
        let (path, value) = parse_assignment("a.b=c=d").unwrap();
        assert_eq!(path, "a.b");
        assert_eq!(value, Value::from("c=d"));
        assert!(parse_assignment("a.b").is_err());
    }

    #[test]
    fn format_resolution_order() {
        let session = session();
        assert_eq!(session.format_for(Some(Format::Yaml), Path::new("a.json")).unwrap(), Format::Yaml);
        assert_eq!(session.format_for(None, Path::new("a.yml")).unwrap(), Format::Yaml);
        assert_eq!(session.format_for(None, Path::new("record")).unwrap(), Format::Json);
        assert!(session.format_for(None, Path::new("a.xml")).is_err());
    }

    #[test]
    fn template_listing() {
        let listing = session().templates(None).unwrap();
        assert_eq!(listing.lines().count(), TemplateKind::ALL.len());
        assert!(listing.starts_with("sample\n"));

        let shape = session().templates(Some(TemplateKind::Minimal)).unwrap();
        assert!(shape.contains("\"title\""));
    }

    #[test]
    fn create_applies_data_then_assignments() {
        let scratch = Scratch::new();
        let data = scratch.path("data.json");
        std::fs::write(&data, r#"{"material": {"crystal_structure": {"spacegroup_number": 5}}}"#).unwrap();

        let document = session()
            .create(NewDocument {
                template: Some(TemplateKind::Sample),
                data: Some(data),
                assignments: vec!["material.crystal_structure.spacegroup_number=225".into()],
                generate_id: true,
            })
            .unwrap();

        assert_eq!(document["material.crystal_structure.spacegroup_number"], Value::Int(225));
        assert_eq!(document["id"].as_str().map(str::len), Some(8));
        assert!(document.get("atom_attribute.position").is_some());
    }

    #[test]
    fn create_uses_configured_template() {
        let session = Session::new(CliConfig::new().with_default_template(TemplateKind::Workflow));
        let document = session.create(NewDocument::default()).unwrap();
        assert_eq!(document.template(), TemplateKind::Workflow);
    }

    #[test]
    fn get_prints_strings_bare() {
        let sample = copper_sample();
        let session = session();
        assert_eq!(session.get(&sample, "material.crystal_structure.spacegroup_symbol").unwrap(), "Fm-3m");
        assert_eq!(session.get(&sample, "material.crystal_structure.spacegroup_number").unwrap(), "225");
        assert!(session.get(&sample, "no.such.path").is_err());
    }

    #[test]
    fn set_rewrites_file_in_place() {
        let scratch = Scratch::new();
        let file = scratch.file_for(Format::Yaml);
        let session = session();
        Document::new(TemplateKind::Knowledge).save(&file, Format::Yaml, None).unwrap();

        session.set(&file, None, None, "content.title", "Copper").unwrap();

        let (reloaded, format) = session.open(&file, None, None).unwrap();
        assert_eq!(format, Format::Yaml);
        assert_eq!(reloaded["content.title"], Value::from("Copper"));
    }

    #[test]
    fn merge_into_separate_output() {
        let scratch = Scratch::new();
        let file = scratch.path("base.json");
        let patch = scratch.path("patch.yaml");
        let out = scratch.path("merged.yaml");
        Document::new(TemplateKind::Knowledge).save(&file, Format::Json, Some(2)).unwrap();
        std::fs::write(&patch, "content:\n  tags: [fcc]\n").unwrap();

        session().merge(&file, &patch, Some(out.as_path()), None).unwrap();

        let merged = Document::load(&out, Format::Yaml).unwrap();
        assert_eq!(merged["content.tags"], Value::from(vec!["fcc"]));
        assert_eq!(merged["schema.type"], Value::from("knowledge_dictionary"));
        let untouched = Document::load(&file, Format::Json).unwrap();
        assert_eq!(untouched["content.tags"], Value::Seq(Vec::new()));
    }

    #[test]
    fn merge_rejects_non_mapping_patch() {
        let scratch = Scratch::new();
        let file = scratch.path("base.json");
        let patch = scratch.path("patch.json");
        Document::new(TemplateKind::Minimal).save(&file, Format::Json, None).unwrap();
        std::fs::write(&patch, "[1, 2]").unwrap();

        assert!(session().merge(&file, &patch, None, None).is_err());
    }

    #[test]
    fn convert_keeps_explicit_template() {
        let scratch = Scratch::new();
        let input = scratch.path("sample.json");
        let output = scratch.path("sample.yaml");
        copper_sample().save(&input, Format::Json, None).unwrap();

        session().convert(&input, &output, Some(TemplateKind::Sample)).unwrap();

        let converted = Document::load_with_template(&output, Format::Yaml, TemplateKind::Sample).unwrap();
        assert_eq!(Value::Map(converted.to_mapping()), Value::from(copper_sample().normalized()));
        assert!(converted.get("title").is_none());
    }

    #[test]
    fn emit_to_stdout_uses_default_format() {
        let document = Document::with_data(TemplateKind::Minimal, mapping(json!({"title": "t"})));
        let text = session().emit(&document, None, None).unwrap().unwrap();
        assert!(text.starts_with("{\n  \"title\": \"t\""));
    }

    #[test]
    fn id_length() {
        assert_eq!(session().id(None).len(), 8);
        assert_eq!(session().id(Some(3)).len(), 3);
    }
}
