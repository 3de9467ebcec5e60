//! Default template shapes
//!
//! Leaves default to `null`, sequences to `[]`. A few leaves carry fixed
//! literals (schema type and version markers, the placeholder sample id).

use serde_json::{json, Value as JsonValue};

use crate::kind::TemplateKind;

pub(crate) fn shape(kind: TemplateKind) -> JsonValue {
    match kind {
        TemplateKind::Sample => sample(),
        TemplateKind::Property => property(),
        TemplateKind::Workflow => workflow(),
        TemplateKind::Operation => operation(),
        TemplateKind::Knowledge => knowledge(),
        TemplateKind::Minimal => minimal(),
        TemplateKind::Extended => extended(),
        TemplateKind::KnowledgeGraph => knowledge_graph(),
    }
}

fn sample() -> JsonValue {
    json!({
        "id": "sample1",
        "material": {
            "element_ratio": {},
            "crystal_structure": {
                "spacegroup_symbol": null,
                "spacegroup_number": null,
                "unit_cell": {
                    "bravais_lattice": null,
                    "lattice_parameter": null,
                    "angle": [],
                },
            },
        },
        "simulation_cell": {
            "volume": {"value": null},
            "number_of_atoms": null,
            "length": [],
            "vector": [],
            "angle": [],
            "repetitions": [],
            "grain_size": null,
            "number_of_grains": 0,
        },
        "atom_attribute": {
            "position": null,
            "species": null,
        },
        "calculated_property": [],
    })
}

fn property() -> JsonValue {
    json!({
        "basename": null,
        "value": null,
        "unit": null,
        "associate_to_sample": [],
    })
}

fn workflow() -> JsonValue {
    json!({
        "algorithm": null,
        "method": null,
        "xc_functional": null,
        "input_parameter": [],
        "input_sample": [],
        "output_sample": [],
        "calculated_property": [],
        "degrees_of_freedom": [],
        "interatomic_potential": {
            "potential_type": null,
            "uri": null,
        },
        "software": {
            "uri": null,
            "version": null,
            "label": null,
        },
        "workflow_manager": {
            "uri": null,
            "version": null,
            "label": null,
        },
        "thermodynamic_ensemble": null,
    })
}

/// Union of the fields used by every operation method
/// (DeleteAtom, SubstituteAtom, AddAtom, Rotate, Translate, Shear)
fn operation() -> JsonValue {
    json!({
        "method": null,
        "input_sample": null,
        "output_sample": null,
        "rotation_matrix": null,
        "translation_vector": null,
        "shear_vector": null,
        "normal_vector": null,
        "distance": null,
    })
}

fn knowledge() -> JsonValue {
    json!({
        "metadata": {
            "version": "1.0",
            "created": null,
            "updated": null,
            "author": null,
        },
        "content": {
            "title": null,
            "description": null,
            "tags": [],
            "data": {},
        },
        "schema": {
            "type": "knowledge_dictionary",
            "format": "json",
        },
    })
}

fn minimal() -> JsonValue {
    json!({
        "title": null,
        "description": null,
        "data": {},
    })
}

fn extended() -> JsonValue {
    json!({
        "metadata": {
            "version": "1.0",
            "created": null,
            "updated": null,
            "author": null,
            "license": null,
            "source": null,
        },
        "content": {
            "title": null,
            "description": null,
            "tags": [],
            "categories": [],
            "keywords": [],
            "data": {},
            "references": [],
        },
        "schema": {
            "type": "knowledge_dictionary",
            "format": "json",
            "version": "1.0",
        },
        "provenance": {
            "origin": null,
            "modified_by": [],
            "change_log": [],
        },
    })
}

fn knowledge_graph() -> JsonValue {
    json!({
        "computational_sample": [],
        "workflow": [],
    })
}
