//! Benchmarks for sequence cursors.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqcursor::{collect_values, for_each, CursorError, Flow, IterSource, Sequence};

fn sequence_of(len: usize) -> Sequence<u64> {
    (0..len as u64).collect()
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("append", |b| {
        let mut seq = Sequence::new();
        let mut i = 0u64;
        b.iter(|| {
            seq.append(black_box(i));
            i += 1;
        })
    });
}

fn bench_create_cursor(c: &mut Criterion) {
    let seq = sequence_of(1_000);
    c.bench_function("create_cursor", |b| {
        b.iter(|| black_box(seq.create_cursor()))
    });
}

fn bench_manual_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("manual_walk");
    for len in [10usize, 1_000, 100_000] {
        let seq = sequence_of(len);
        group.bench_with_input(BenchmarkId::new("elements", len), &len, |b, _| {
            b.iter(|| {
                let mut cursor = seq.create_cursor();
                let mut sum = 0u64;
                while cursor.advance().unwrap() {
                    sum += *cursor.current().unwrap();
                }
                cursor.close();
                black_box(sum)
            })
        });
    }
    group.finish();
}

fn bench_for_each(c: &mut Criterion) {
    let mut group = c.benchmark_group("for_each");
    for len in [10usize, 1_000, 100_000] {
        let seq = sequence_of(len);
        group.bench_with_input(BenchmarkId::new("elements", len), &len, |b, _| {
            b.iter(|| {
                let mut sum = 0u64;
                for_each(&seq, |_, n| {
                    sum += n;
                    Ok::<_, CursorError>(Flow::Continue)
                })
                .unwrap();
                black_box(sum)
            })
        });
    }
    group.finish();
}

fn bench_std_iter_baseline(c: &mut Criterion) {
    let seq = sequence_of(100_000);
    c.bench_function("slice_iter_baseline", |b| {
        b.iter(|| black_box(seq.as_slice().iter().sum::<u64>()))
    });
}

fn bench_collect(c: &mut Criterion) {
    let seq = sequence_of(10_000);
    c.bench_function("collect_values_sequence", |b| {
        b.iter(|| black_box(collect_values(&seq).unwrap()))
    });

    let source = IterSource::new(|| 0..10_000u64);
    c.bench_function("collect_values_iter_source", |b| {
        b.iter(|| black_box(collect_values(&source).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_create_cursor,
    bench_manual_walk,
    bench_for_each,
    bench_std_iter_baseline,
    bench_collect,
);

criterion_main!(benches);
