use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use docbind::{bind, bind_map, from_binary, from_str, to_binary, to_string, Bound};
use std::collections::BTreeMap;

#[derive(Default, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

bind!(User {
    id,
    name,
    email,
    active,
});

#[derive(Default, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

bind_map!(Product {
    "s" => sku,
    "n" => name,
    "p" => price,
    "q" => quantity,
});

#[derive(Default, Clone)]
struct Catalog {
    owner: User,
    products: Vec<Product>,
    by_shelf: BTreeMap<u32, Vec<String>>,
}

bind!(Catalog {
    owner,
    products,
    by_shelf,
});

fn user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn catalog(size: u32) -> Catalog {
    Catalog {
        owner: user(),
        products: (0..size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect(),
        by_shelf: (0..size / 10)
            .map(|shelf| (shelf, vec![format!("SKU{}", shelf * 10)]))
            .collect(),
    }
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = user();

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let text = r#"{"id":123,"name":"Alice","email":"alice@example.com","active":true}"#;

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(text)))
    });
}

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for size in [10, 100, 500].iter() {
        let catalog = catalog(*size);
        let text = catalog.to_text(None).unwrap();

        group.bench_with_input(BenchmarkId::new("serialize", size), size, |b, _| {
            b.iter(|| to_string(black_box(&catalog)))
        });
        group.bench_with_input(BenchmarkId::new("deserialize", size), size, |b, _| {
            b.iter(|| from_str::<Catalog>(black_box(&text)))
        });
    }
    group.finish();
}

fn benchmark_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary");

    for size in [10, 100, 500].iter() {
        let catalog = catalog(*size);
        let bytes = catalog.to_binary().unwrap();

        group.bench_with_input(BenchmarkId::new("serialize", size), size, |b, _| {
            b.iter(|| to_binary(black_box(&catalog)))
        });
        group.bench_with_input(BenchmarkId::new("deserialize", size), size, |b, _| {
            b.iter(|| from_binary::<Catalog>(black_box(&bytes)))
        });
    }
    group.finish();
}

fn benchmark_in_place_update(c: &mut Criterion) {
    let patch = r#"{"owner":{"active":false},"by_shelf":{"3":["SKU30","SKU31"]}}"#;

    c.bench_function("in_place_update", |b| {
        let mut target = catalog(100);
        b.iter(|| target.from_text(black_box(patch)))
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_text,
    benchmark_binary,
    benchmark_in_place_update
);
criterion_main!(benches);
