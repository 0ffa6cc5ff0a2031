use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use validus::prelude::*;

fn bench_leaves(c: &mut Criterion) {
    let options = ValidationOptions::default();
    let string = validus::resolve(validus::string().min_length(3).max_length(50)).unwrap();
    let value = json!("hello world");
    c.bench_function("string_valid", |b| {
        b.iter(|| string.validate(black_box(&value), &options))
    });

    let number = validus::resolve(validus::number().integer().minimum(0.0).maximum(1000.0)).unwrap();
    let value = json!(500);
    c.bench_function("integer_valid", |b| {
        b.iter(|| number.validate(black_box(&value), &options))
    });

    let date = validus::resolve(validus::date()).unwrap();
    let value = json!("2024-05-06T07:08:09Z");
    c.bench_function("date_valid", |b| {
        b.iter(|| date.validate(black_box(&value), &options))
    });
}

fn bench_object(c: &mut Criterion) {
    let options = ValidationOptions::default();
    let user = validus::resolve(
        validus::object()
            .property("name", validus::string().min_length(1))
            .property("email", validus::string())
            .property("age", validus::optional(validus::number().integer().minimum(0.0)))
            .property("role", validus::with_default(validus::one_of(["user", "admin"]), "user"))
            .never("password"),
    )
    .unwrap();

    let valid = json!({"name": "Alex", "email": "alex@example.com", "age": 30});
    c.bench_function("object_4_properties_valid", |b| {
        b.iter(|| user.validate(black_box(&valid), &options))
    });

    let invalid = json!({"email": 1, "age": -1, "password": "x", "extra": true});
    c.bench_function("object_4_properties_invalid", |b| {
        b.iter(|| user.validate(black_box(&invalid), &options))
    });
}

fn bench_array(c: &mut Criterion) {
    let options = ValidationOptions::default();
    let numbers = validus::resolve(validus::array(validus::number()).unique_items()).unwrap();
    let small = json!((0..10).collect::<Vec<_>>());
    let large = json!((0..200).collect::<Vec<_>>());
    c.bench_function("array_unique_10", |b| {
        b.iter(|| numbers.validate(black_box(&small), &options))
    });
    c.bench_function("array_unique_200", |b| {
        b.iter(|| numbers.validate(black_box(&large), &options))
    });
}

fn bench_tuple(c: &mut Criterion) {
    let options = ValidationOptions::default();
    let t = validus::resolve(validus::tuple([
        validus::rest(validus::string()),
        TupleMember::fixed(()),
        validus::rest(validus::number()),
    ]))
    .unwrap();
    let value = json!(["a", "b", "c", null, 1, 2, 3]);
    c.bench_function("tuple_rest_runs", |b| {
        b.iter(|| t.validate(black_box(&value), &options))
    });
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_json_object", |b| {
        b.iter(|| validus::resolve(black_box(json!({"kind": "point", "xy": [1, 2]}))))
    });
}

criterion_group!(
    benches,
    bench_leaves,
    bench_object,
    bench_array,
    bench_tuple,
    bench_resolve
);
criterion_main!(benches);
