use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kdict_document::{Document, Map, NumericArray, TemplateKind, Value};
use serde_json::json;

fn partial_update() -> Map {
    match Value::from(json!({
        "material": {
            "element_ratio": {"Fe": 0.7, "Cr": 0.2, "Ni": 0.1},
            "crystal_structure": {"spacegroup_number": 229, "unit_cell": {"lattice_parameter": 2.87}},
        },
        "calculated_property": ["energy", "volume"],
    })) {
        Value::Map(map) => map,
        _ => Map::new(),
    }
}

fn bench_update(c: &mut Criterion) {
    let partial = partial_update();
    c.bench_function("update_sample", |b| {
        b.iter(|| {
            let mut sample = Document::new(TemplateKind::Sample);
            sample.update(black_box(partial.clone()));
            sample
        });
    });
}

fn bench_normalize(c: &mut Criterion) {
    let mut sample = Document::with_data(TemplateKind::Sample, partial_update());
    let positions: Vec<f64> = (0..3000).map(f64::from).collect();
    if let Ok(array) = NumericArray::from_shape_vec(vec![1000, 3], positions) {
        sample.set("atom_attribute.position", array);
    }
    c.bench_function("normalize_sample_1000_atoms", |b| {
        b.iter(|| black_box(&sample).normalized());
    });
}

criterion_group!(benches, bench_update, bench_normalize);
criterion_main!(benches);
