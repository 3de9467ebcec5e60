//! Testing utilities for kdict workspace
//!
//! Shared fixtures and helpers.

#![allow(missing_docs)]

use std::path::PathBuf;

use kdict_document::{Document, Format, Map, NumericArray, TemplateKind, Value};
use tempfile::TempDir;

/// Build a mapping from a `serde_json::json!` literal
///
/// # Panics
/// If the literal is not an object
pub fn mapping(value: serde_json::Value) -> Map {
    match Value::from(value) {
        Value::Map(map) => map,
        other => panic!("fixture must be a JSON object, got {}", other.kind()),
    }
}

/// FCC copper sample with a few host-typed values
pub fn copper_sample() -> Document {
    let mut sample = Document::with_data(
        TemplateKind::Sample,
        mapping(serde_json::json!({
            "id": "cu-fcc",
            "material": {
                "element_ratio": {"Cu": 1.0},
                "crystal_structure": {
                    "spacegroup_symbol": "Fm-3m",
                    "spacegroup_number": 225,
                    "unit_cell": {"bravais_lattice": "cF", "lattice_parameter": 3.615},
                },
            },
        })),
    );
    sample.set("simulation_cell.number_of_atoms", 4_u32);
    sample.set("simulation_cell.repetitions", NumericArray::from_vec(vec![1_i32, 1, 1]));
    sample.set(
        "simulation_cell.vector",
        NumericArray::from_rows(&[[3.615_f64, 0.0, 0.0], [0.0, 3.615, 0.0], [0.0, 0.0, 3.615]]),
    );
    sample
}

/// Knowledge record with author and tags filled in
pub fn annotated_knowledge() -> Document {
    let mut record = Document::new(TemplateKind::Knowledge);
    record.set("metadata.author", "materials group");
    record.set("content.title", "Elastic constants of Cu");
    record.set("content.tags", vec!["elasticity", "copper"]);
    record.set("content.data.c11", 168.4);
    record
}

/// Scratch directory plus a file path inside it
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    /// # Panics
    /// If the temporary directory cannot be created
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create scratch directory"),
        }
    }

    /// Path for a file named `record.<format>`
    pub fn file_for(&self, format: Format) -> PathBuf {
        self.dir.path().join(format!("record.{format}"))
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for Scratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Save then load `document` in `format`
///
/// # Panics
/// If either step fails
pub fn round_trip(document: &Document, format: Format) -> Document {
    let scratch = Scratch::new();
    let path = scratch.file_for(format);
    document.save(&path, format, Some(2)).expect("save document");
    Document::load(&path, format).expect("load document")
}
