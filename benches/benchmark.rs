use std::hash::BuildHasher;
use std::hash::Hasher;

use ahash::RandomState;
use circhash_rs::{fingerprint, minimal_rotation, rotate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xxhash_rust::xxh3::xxh3_64;

/// Generate a pseudo‑random DNA sequence of length `len` (xorshift64).
fn generate_dna(len: usize) -> Vec<u8> {
    const BASES: &[u8; 4] = b"ACGT";
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            BASES[(state & 3) as usize]
        })
        .collect()
}

/// The quadratic approach: materialize every rotation, keep the minimum.
fn naive_minimal_rotation(seq: &[u8]) -> Vec<u8> {
    (0..seq.len()).map(|i| rotate(seq, i)).min().unwrap()
}

fn bench_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("least_rotation");

    for len in [1_000usize, 10_000] {
        let seq = generate_dna(len);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("booth", len), &seq, |b, seq| {
            b.iter(|| minimal_rotation(black_box(seq)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("naive", len), &seq, |b, seq| {
            b.iter(|| naive_minimal_rotation(black_box(seq)))
        });

        // all-identical input: the worst case for comparison-heavy approaches
        let uniform = vec![b'A'; len];
        group.bench_with_input(BenchmarkId::new("booth_uniform", len), &uniform, |b, seq| {
            b.iter(|| minimal_rotation(black_box(seq)).unwrap())
        });
    }

    group.finish();
}

fn bench_fingerprint(c: &mut Criterion) {
    let seq = generate_dna(1_000_000);

    let mut group = c.benchmark_group("fingerprint_vs_others");
    group.throughput(Throughput::Bytes(seq.len() as u64));

    group.bench_with_input(BenchmarkId::new("fingerprint", seq.len()), &seq, |b, seq| {
        b.iter(|| fingerprint(black_box(seq)).unwrap())
    });

    // plain hashes of the raw (non‑canonical) bytes, for scale
    group.bench_with_input(BenchmarkId::new("xxh3_64", seq.len()), &seq, |b, seq| {
        b.iter(|| xxh3_64(black_box(seq)))
    });

    group.bench_with_input(BenchmarkId::new("ahash", seq.len()), &seq, |b, seq| {
        let state = RandomState::new();
        b.iter(|| {
            let mut hasher = state.build_hasher();
            hasher.write(black_box(seq));
            hasher.finish()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_canonical, bench_fingerprint);
criterion_main!(benches);
