//! SHA-256 benchmarks
//!
//! Run: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha256::sha256::{Sha256, pad_message};

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for size in [0, 55, 64, 256, 1024, 4096, 16384, 65536] {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            let mut engine = Sha256::new();
            b.iter(|| engine.hash(core::hint::black_box(data)));
        });
    }

    group.finish();
}

fn bench_padding(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256/pad");

    for size in [0, 1024, 65536] {
        let data = vec![0u8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| pad_message(core::hint::black_box(data)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hash, bench_padding);
criterion_main!(benches);
