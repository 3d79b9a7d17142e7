use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use jsonlet_core::{parse, render};

const FLAT_OBJECT: &str =
    r#"{"id": 1204, "name": "sensor-a", "active": true, "reading": 20.125, "unit": "C"}"#;

const NESTED_DOCUMENT: &str = r#"{
    "users": [
        {"id": 1, "name": "Alice", "scores": [95, 87, 92]},
        {"id": 2, "name": "Bob", "scores": [78, 81, 90]},
        {"id": 3, "name": "Carol", "scores": [99, 95, 97]}
    ],
    "meta": {"count": 3, "page": 1, "next": null}
}"#;

fn numeric_array(len: usize) -> String {
    let items: Vec<String> = (0..len).map(|i| format!("{}.5", i)).collect();
    format!("[{}]", items.join(", "))
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_flat_object", |b| {
        b.iter(|| parse(black_box(FLAT_OBJECT)).unwrap())
    });

    c.bench_function("parse_nested_document", |b| {
        b.iter(|| parse(black_box(NESTED_DOCUMENT)).unwrap())
    });

    let big_array = numeric_array(1000);
    c.bench_function("parse_numeric_array_1000", |b| {
        b.iter(|| parse(black_box(&big_array)).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let tree = parse(NESTED_DOCUMENT).unwrap();
    c.bench_function("render_nested_document", |b| {
        b.iter(|| render(black_box(&tree)))
    });
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
