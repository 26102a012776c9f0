// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for buffer mutation primitives.

use byte_alloc::{ArenaAllocator, HeapAllocator, MemoryBudget};
use bytestr::{ops, ByteBuffer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_push_back(c: &mut Criterion) {
    let heap = HeapAllocator::new();
    let arena = ArenaAllocator::new(MemoryBudget::from_mb(16));
    let mut group = c.benchmark_group("push_back");

    for n in [64usize, 1024, 16 * 1024] {
        group.bench_with_input(BenchmarkId::new("heap", n), &n, |bench, &n| {
            bench.iter(|| {
                let mut b = ByteBuffer::new("", &heap).unwrap();
                for i in 0..n {
                    ops::push_back(&mut b, i as u8, &heap).unwrap();
                }
                b.release(&heap);
            });
        });
        group.bench_with_input(BenchmarkId::new("arena", n), &n, |bench, &n| {
            bench.iter(|| {
                let mut b = ByteBuffer::new("", &arena).unwrap();
                for i in 0..n {
                    ops::push_back(&mut b, i as u8, &arena).unwrap();
                }
                b.release(&arena);
            });
        });
    }
    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let heap = HeapAllocator::new();
    let text = [b'x'; 4096];

    c.bench_function("insert_front_4k", |bench| {
        bench.iter(|| {
            let mut b = ByteBuffer::new(&text, &heap).unwrap();
            ops::insert(&mut b, 0, black_box(8), b'-', &heap).unwrap();
            b.release(&heap);
        });
    });
}

fn bench_replace(c: &mut Criterion) {
    let heap = HeapAllocator::new();
    let text = [b'x'; 4096];
    let mut group = c.benchmark_group("replace");

    for (name, replacement) in [("shrink", &b"ab"[..]), ("grow", &[b'y'; 64][..])] {
        group.bench_function(name, |bench| {
            bench.iter(|| {
                let mut b = ByteBuffer::new(&text, &heap).unwrap();
                ops::replace(&mut b, 100, 16, black_box(replacement), &heap).unwrap();
                b.release(&heap);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push_back, bench_insert_front, bench_replace);
criterion_main!(benches);
