use criterion::{Criterion, black_box, criterion_group, criterion_main};
use parameter_interface::{Schema, Transformer, parse_schema};
use serde_json::{Value, json};

fn flat_schema(fields: usize) -> Value {
    let types = ["string", "int", "bool", "dateTime", "email"];
    let map = (0..fields)
        .map(|i| (format!("field{i}"), json!(types[i % types.len()])))
        .collect::<serde_json::Map<_, _>>();
    Value::Object(map)
}

fn nested_schema(depth: usize) -> Value {
    (0..depth).fold(json!({ "leaf": ["a", "b", 1] }), |inner, i| {
        let mut map = serde_json::Map::new();
        map.insert(format!("level{i}"), json!({ "type": "object", "rule": inner }));
        map.insert(format!("list{i}"), json!({ "type": "array", "itemType": "int" }));
        Value::Object(map)
    })
}

fn bench_transform(c: &mut Criterion) {
    let transformer = Transformer::builtin();
    let flat: Schema = parse_schema(&flat_schema(200)).unwrap();
    let nested: Schema = parse_schema(&nested_schema(16)).unwrap();

    c.bench_function("transform_flat_200", |b| {
        b.iter(|| transformer.transform(black_box(&flat)).unwrap())
    });
    c.bench_function("transform_nested_16", |b| {
        b.iter(|| transformer.transform(black_box(&nested)).unwrap())
    });
    c.bench_function("decode_and_transform_flat_200", |b| {
        let document = flat_schema(200);
        b.iter(|| transformer.transform_value(black_box(&document)).unwrap())
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
