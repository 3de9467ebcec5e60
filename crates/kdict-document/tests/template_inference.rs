//! Functional tests for template inference on load.
//!
//! Raw files carry no template tag; the loader picks one from the top-level
//! keys that are present and seeds the document with it.

use kdict_document::prelude::*;
use kdict_test_utils::Scratch;
use pretty_assertions::assert_eq;

fn load_text(text: &str, format: Format) -> Document {
    let scratch = Scratch::new();
    let path = scratch.file_for(format);
    std::fs::write(&path, text).unwrap();
    Document::load(&path, format).unwrap()
}

#[test]
fn metadata_schema_provenance_loads_as_extended() {
    let document = load_text(
        r#"{"metadata": {"author": "a"}, "schema": {}, "provenance": {"origin": "lab"}}"#,
        Format::Json,
    );
    assert_eq!(document.template(), TemplateKind::Extended);
    assert_eq!(document["metadata.author"], Value::from("a"));
    assert_eq!(document["provenance.origin"], Value::from("lab"));
    assert_eq!(document["content.references"], Value::Seq(Vec::new()));
    assert_eq!(document["schema.version"], Value::from("1.0"));
}

#[test]
fn metadata_schema_loads_as_knowledge() {
    let document = load_text("metadata:\n  author: b\nschema:\n  format: yaml\n", Format::Yaml);
    assert_eq!(document.template(), TemplateKind::Knowledge);
    assert_eq!(document["schema.format"], Value::from("yaml"));
    assert_eq!(document["schema.type"], Value::from("knowledge_dictionary"));
    assert!(document.get("provenance").is_none());
}

#[test]
fn anything_else_loads_as_minimal() {
    let document = load_text("title: Grain boundary\nextra: 3\n", Format::Yaml);
    assert_eq!(document.template(), TemplateKind::Minimal);
    assert_eq!(document["title"], Value::from("Grain boundary"));
    assert_eq!(document["extra"], Value::Int(3));
    assert_eq!(document["data"], Value::map());
}

#[test]
fn provenance_without_schema_is_minimal() {
    let document = load_text(r#"{"metadata": {}, "provenance": {}}"#, Format::Json);
    assert_eq!(document.template(), TemplateKind::Minimal);
}

#[test]
fn loaded_values_override_template_defaults() {
    let document = load_text(
        r#"{"metadata": {"version": "2.0"}, "schema": {"type": "custom"}, "content": {"tags": ["x"]}}"#,
        Format::Json,
    );
    assert_eq!(document["metadata.version"], Value::from("2.0"));
    assert_eq!(document["schema.type"], Value::from("custom"));
    assert_eq!(document["content.tags"], Value::from(vec!["x"]));
    assert!(document["content.title"].is_null());
}

#[test]
fn non_mapping_root_is_rejected() {
    let scratch = Scratch::new();
    let path = scratch.file_for(Format::Yaml);
    std::fs::write(&path, "- a\n- b\n").unwrap();
    assert!(matches!(
        Document::load(&path, Format::Yaml),
        Err(DocumentError::NotAMapping("sequence"))
    ));
}

#[test]
fn explicit_template_still_requires_mapping_root() {
    let scratch = Scratch::new();
    let path = scratch.file_for(Format::Yaml);
    std::fs::write(&path, "- sample1\n- sample2\n").unwrap();
    assert!(matches!(
        Document::load_with_template(&path, Format::Yaml, TemplateKind::Sample),
        Err(DocumentError::NotAMapping("sequence"))
    ));
}
