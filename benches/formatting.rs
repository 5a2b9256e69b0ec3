use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_ipfmt::{to_string, to_writer};
use std::collections::LinkedList;

fn benchmark_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_scalar");

    group.bench_function("i8", |b| b.iter(|| to_string(black_box(&-1_i8))));
    group.bench_function("i32", |b| b.iter(|| to_string(black_box(&2130706433_i32))));
    group.bench_function("i64", |b| {
        b.iter(|| to_string(black_box(&8875824491850138409_i64)))
    });
    group.bench_function("u128", |b| b.iter(|| to_string(black_box(&u128::MAX))));

    group.finish();
}

fn benchmark_text(c: &mut Criterion) {
    let text = String::from("1.2.3.4.5.6.7.8.99");

    c.bench_function("format_text", |b| b.iter(|| to_string(black_box(&text))));
}

fn benchmark_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_sequence");

    for size in [4, 16, 256].iter() {
        let ints: Vec<i32> = (0..*size).map(|i| i * 0x010101).collect();
        let list: LinkedList<i64> = ints.iter().map(|&i| i as i64).collect();
        let texts: Vec<String> = (0..*size).map(|i| i.to_string()).collect();

        group.bench_with_input(BenchmarkId::new("vec_i32", size), &ints, |b, ints| {
            b.iter(|| to_string(black_box(ints)))
        });
        group.bench_with_input(BenchmarkId::new("list_i64", size), &list, |b, list| {
            b.iter(|| to_string(black_box(list)))
        });
        group.bench_with_input(BenchmarkId::new("vec_string", size), &texts, |b, texts| {
            b.iter(|| to_string(black_box(texts)))
        });
    }

    group.finish();
}

fn benchmark_writer(c: &mut Criterion) {
    let quad = vec![0x11_u8, 0x22, 0x33, 0x44];

    c.bench_function("to_writer_vec_u8", |b| {
        let mut buffer = Vec::with_capacity(64);
        b.iter(|| {
            buffer.clear();
            to_writer(&mut buffer, black_box(&quad))
        })
    });
}

criterion_group!(
    benches,
    benchmark_scalars,
    benchmark_text,
    benchmark_sequences,
    benchmark_writer
);
criterion_main!(benches);
