//! Property tests for the document container.
//!
//! - Template isolation: independently constructed documents never share state.
//! - Deep merge keeps every template key and replaces sequences wholesale.
//! - Dotted-path set followed by get returns the value that was set.
//! - Arbitrary nested data survives a JSON and YAML round trip in normalized form.

use kdict_document::prelude::*;
use kdict_test_utils::{mapping, round_trip};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6_f64..1.0e6).prop_map(Value::Float),
        "[a-z ]{0,8}".prop_map(Value::String),
    ]
}

fn nested() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
            prop::collection::vec(("[a-z_]{1,6}", inner), 0..4)
                .prop_map(|entries| Value::Map(entries.into_iter().collect())),
        ]
    })
}

fn template_kind() -> impl Strategy<Value = TemplateKind> {
    prop::sample::select(TemplateKind::ALL.to_vec())
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z_]{1,6}", 1..5).prop_map(|segments| segments.join("."))
}

#[test]
fn every_template_is_isolated() {
    for kind in TemplateKind::ALL {
        let mut first = Document::new(kind);
        let second = Document::new(kind);

        let top = first.as_map().keys().next().cloned().unwrap();
        first.set(&format!("{top}.injected"), "mutation");

        assert_ne!(first, second, "{kind}");
        assert_eq!(second, Document::new(kind), "{kind}");
    }
}

#[test]
fn deep_merge_keeps_untouched_sample_fields() {
    let mut sample = Document::new(TemplateKind::Sample);
    sample.update(mapping(json!({"material": {"crystal_structure": {"spacegroup_number": 5}}})));

    assert_eq!(sample["material.crystal_structure.spacegroup_number"], Value::Int(5));
    assert_eq!(sample.get("atom_attribute.position"), Some(&Value::Null));
    assert_eq!(sample.get("material.crystal_structure.unit_cell.angle"), Some(&Value::Seq(Vec::new())));
    assert_eq!(sample["id"], Value::from("sample1"));
}

#[test]
fn sequences_are_replaced_not_appended() {
    let mut sample = Document::new(TemplateKind::Sample);
    sample.update(mapping(json!({"calculated_property": [1, 2]})));
    sample.update(mapping(json!({"calculated_property": [3]})));
    assert_eq!(sample["calculated_property"], Value::from(json!([3])));
}

#[test]
fn unknown_template_lists_valid_identifiers() {
    let err = Document::construct("nonexistent", None).unwrap_err();
    let message = err.to_string();
    for kind in TemplateKind::ALL {
        assert!(message.contains(kind.as_str()), "{message}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_update_keeps_template_keys(
        kind in template_kind(),
        entries in prop::collection::vec(("[a-z_]{1,8}", nested()), 0..6),
    ) {
        let mut document = Document::new(kind);
        let template_keys: Vec<String> = document.as_map().keys().cloned().collect();

        document.update(entries.into_iter().collect());

        for key in template_keys {
            prop_assert!(document.as_map().contains_key(&key), "lost {}", key);
        }
    }

    #[test]
    fn prop_set_then_get(kind in template_kind(), path in path(), value in nested()) {
        let mut document = Document::new(kind);
        document.set(&path, value.clone());
        prop_assert_eq!(document.get(&path), Some(&value));
    }

    #[test]
    fn prop_get_missing_returns_default(path in path()) {
        let document = Document::new(TemplateKind::Minimal);
        let fallback = Value::from("fallback");
        let missing = format!("absent.{path}");
        prop_assert_eq!(document.get_or(&missing, &fallback), &fallback);
    }

    #[test]
    fn prop_sequence_update_is_wholesale(
        first in prop::collection::vec(any::<i64>(), 0..6),
        second in prop::collection::vec(any::<i64>(), 0..6),
    ) {
        let mut document = Document::new(TemplateKind::Workflow);
        document.update(mapping(json!({"input_parameter": first})));
        document.update(mapping(json!({"input_parameter": second.clone()})));
        prop_assert_eq!(&document["input_parameter"], &Value::from(second));
    }

    #[test]
    fn prop_round_trip_matches_normalized(data in nested()) {
        let mut record = Document::new(TemplateKind::Knowledge);
        record.set("content.data.payload", data);

        for format in Format::ALL {
            let loaded = round_trip(&record, format);
            prop_assert_eq!(loaded.template(), TemplateKind::Knowledge);
            prop_assert_eq!(Value::Map(loaded.to_mapping()), Value::from(record.normalized()));
        }
    }
}
