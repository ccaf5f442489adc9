//! Benchmarks for layout computation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabgen_core::{FingerType, LayoutInputs};
use tabgen_layout::LayoutEngine;
use tabgen_resolver::verify_properties;

fn automatic_inputs() -> LayoutInputs {
    LayoutInputs {
        margin: 5.0,
        default_width: 12.0,
        kerf: 0.2,
        secondary_distance: 180.0,
        interior_wall_count: 2,
        ..LayoutInputs::for_face(420.0)
    }
}

fn bench_compute(c: &mut Criterion) {
    let engine = LayoutEngine::new();
    let inputs = automatic_inputs();

    c.bench_function("compute_automatic", |b| {
        b.iter(|| engine.compute(black_box(&inputs)))
    });

    let inputs = LayoutInputs {
        finger_type: FingerType::UserDefined,
        ..automatic_inputs()
    };
    c.bench_function("compute_user_defined", |b| {
        b.iter(|| engine.compute(black_box(&inputs)))
    });
}

fn bench_verify(c: &mut Criterion) {
    let properties = LayoutEngine::new()
        .compute(&automatic_inputs())
        .unwrap()
        .into_properties();

    c.bench_function("verify_properties", |b| {
        b.iter(|| verify_properties(black_box(&properties)))
    });
}

criterion_group!(benches, bench_compute, bench_verify);
criterion_main!(benches);
