//! Basic benchmarks for the `conditional_delete` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::ptr::NonNull;

use conditional_delete::{ConditionalDelete, MaybeOwning, UniquePtr};
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = u64;
const TEST_VALUE: TestItem = 1024;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("conditional_delete");

    group.bench_function("box_baseline", |b| {
        b.iter(|| drop(black_box(Box::new(TEST_VALUE))));
    });

    group.bench_function("unique_ptr_default", |b| {
        b.iter(|| drop(black_box(UniquePtr::<TestItem>::from_box(Box::new(TEST_VALUE)))));
    });

    group.bench_function("maybe_owning_owned", |b| {
        b.iter(|| drop(black_box(MaybeOwning::owning(Box::new(TEST_VALUE)))));
    });

    group.bench_function("maybe_owning_borrowed", |b| {
        let mut target = TEST_VALUE;

        b.iter(|| {
            // SAFETY: `target` outlives the handle and is not touched while it exists.
            let handle = unsafe { MaybeOwning::borrowing(NonNull::from(&mut target)) };
            drop(black_box(handle));
        });
    });

    group.bench_function("owns_query", |b| {
        let policy = ConditionalDelete::<TestItem>::with_owns(black_box(false));

        b.iter(|| black_box(policy).owns());
    });

    group.finish();
}
