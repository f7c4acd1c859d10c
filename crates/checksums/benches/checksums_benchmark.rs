//! crates/checksums/benches/checksums_benchmark.rs
//!
//! Benchmarks for digest computation performance.
//!
//! Run with: `cargo bench -p checksums`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;

use checksums::strong::{Md5, Sha1, Sha256, Sha512};

/// Generate random data of the specified size.
fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0u8; size];
    rng.fill(&mut data[..]);
    data
}

/// Benchmark MD5 digest computation.
fn bench_md5_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_digest");

    for size in [55, 64, 512, 4096, 32768, 131072] {
        let data = generate_random_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("digest", size), &data, |b, data| {
            b.iter(|| black_box(Md5::digest(black_box(data))));
        });
    }

    group.finish();
}

/// Benchmark streaming MD5 with small, unaligned updates.
fn bench_md5_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_streaming");

    let data = generate_random_data(65536);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk in [7, 61, 1000] {
        group.bench_with_input(BenchmarkId::new("update", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut hasher = Md5::new();
                for piece in data.chunks(chunk) {
                    hasher.update(black_box(piece));
                }
                black_box(hasher.finalize())
            });
        });
    }

    group.finish();
}

/// Compare all strong digests on the same input.
fn bench_algorithm_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithm_comparison");

    let size = 8192;
    let data = generate_random_data(size);

    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("md5", |b| {
        b.iter(|| black_box(Md5::digest(black_box(&data))));
    });

    group.bench_function("sha1", |b| {
        b.iter(|| black_box(Sha1::digest(black_box(&data))));
    });

    group.bench_function("sha256", |b| {
        b.iter(|| black_box(Sha256::digest(black_box(&data))));
    });

    group.bench_function("sha512", |b| {
        b.iter(|| black_box(Sha512::digest(black_box(&data))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_md5_digest,
    bench_md5_streaming,
    bench_algorithm_comparison,
);

criterion_main!(benches);
