//! Error-path cost: clone + bounded-buffer context copy.
//!
//! Run: cargo bench -p serror

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use serror::{stamp, ErrorBase, FILE_CAPACITY};

#[derive(Clone, Debug)]
struct NotFound {
    base: ErrorBase,
}

serror::impl_site_error!(NotFound);

fn not_found(symbol: &str) -> NotFound {
    NotFound {
        base: ErrorBase::new(format!("symbol '{symbol}' not found")),
    }
}

fn bench_stamp(c: &mut Criterion) {
    let err = not_found("x");

    c.bench_function("stamp_short_file", |b| {
        b.iter(|| stamp(black_box(&err), black_box("parser.rs"), black_box(42)))
    });

    let long = "m".repeat(FILE_CAPACITY * 2);
    c.bench_function("stamp_truncating_file", |b| {
        b.iter(|| stamp(black_box(&err), black_box(long.as_str()), black_box(42)))
    });

    c.bench_function("stamped_macro", |b| b.iter(|| serror::stamped!(black_box(&err).clone())));

    // Baseline: the clone alone, to isolate the context-copy cost.
    c.bench_function("clone_only", |b| b.iter(|| black_box(&err).clone()));
}

criterion_group!(benches, bench_stamp);
criterion_main!(benches);
