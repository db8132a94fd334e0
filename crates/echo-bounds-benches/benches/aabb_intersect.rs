// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::cast_precision_loss)]
//! Benchmark: pairwise intersection over a strip of boxes.
//!
//! Each box overlaps its right neighbour by half its width, so the strip
//! mixes overlapping, touching, and disjoint pairs. Throughput "elements"
//! are the number of intersections per iteration (n * n).
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use echo_bounds::Aabb;
use std::{hint::black_box, time::Duration};

fn strip(n: usize) -> Vec<Aabb> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            Aabb::from_points([(x, 0.0), (x + 2.0, 1.0)])
        })
        .collect()
}

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("aabb_intersect_all_pairs");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(4));
    for &n in &[8usize, 64, 256] {
        let boxes = strip(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &boxes, |b, boxes| {
            b.iter(|| {
                let mut populated = 0usize;
                for a in boxes {
                    for other in boxes {
                        if a.intersect(black_box(other)).has_data() {
                            populated += 1;
                        }
                    }
                }
                black_box(populated)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_intersect);
criterion_main!(benches);
