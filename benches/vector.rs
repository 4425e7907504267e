use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vector3::Vector3;

pub fn bench_vector3_add(c: &mut Criterion) {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-4.0, 5.0, 0.5);
    c.bench_function("vector3_add", |bench| {
        bench.iter(|| black_box(&a) + black_box(&b));
    });
}

pub fn bench_vector3_add_in_place(c: &mut Criterion) {
    let b = Vector3::new(-4.0, 5.0, 0.5);
    c.bench_function("vector3_add_in_place", |bench| {
        let mut a = Vector3::new(1.0, 2.0, 3.0);
        bench.iter(|| {
            a += black_box(&b);
        });
    });
}

pub fn bench_vector3_normalized(c: &mut Criterion) {
    let a = Vector3::new(1.0, 2.0, 3.0);
    c.bench_function("vector3_normalized", |bench| {
        bench.iter(|| black_box(&a).normalized());
    });
}

pub fn bench_vector3_cross(c: &mut Criterion) {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-4.0, 5.0, 0.5);
    c.bench_function("vector3_cross", |bench| {
        bench.iter(|| black_box(&a).cross(black_box(&b)));
    });
}

criterion_group!(
    benches,
    bench_vector3_add,
    bench_vector3_add_in_place,
    bench_vector3_normalized,
    bench_vector3_cross
);
criterion_main!(benches);
