// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glidecore_index::{Aabb2D, Index, TreeParams};

fn gen_grid_rects(n: usize, cell: i32) -> Vec<Aabb2D<i32>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as i32 * cell;
            let y0 = y as i32 * cell;
            out.push(Aabb2D::<i32>::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

fn gen_grid_rects_f64(n: usize, cell: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Aabb2D::<f64>::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u32) -> i32 {
        (self.next_u64() % u64::from(n)) as i32
    }
}

/// Airspace-like boxes: many small zones, a few huge ones, heavy overlap.
fn gen_airspace_rects(count: usize, extent: u32) -> Vec<Aabb2D<i32>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for i in 0..count {
        let size = if i % 64 == 0 {
            rng.below(extent / 4) + extent as i32 / 8
        } else {
            rng.below(extent / 64) + 50
        };
        let x0 = rng.below(extent);
        let y0 = rng.below(extent);
        out.push(Aabb2D::<i32>::from_xywh(x0, y0, size, size));
    }
    out
}

fn gen_query_boxes(count: usize, extent: u32) -> Vec<Aabb2D<i32>> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            let x = rng.below(extent);
            let y = rng.below(extent);
            Aabb2D::new(x, y, x, y)
        })
        .collect()
}

fn bench_flatvec(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatvec_i32");
    for &n in &[32usize, 64] {
        let rects = gen_grid_rects(n, 1000);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_query_rect_n{}", n), |b| {
            b.iter_batched(
                Index::<i32, u32>::new,
                |mut idx| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        let _ = idx.insert(r, i as u32);
                    }
                    let hits: usize = idx
                        .query_rect(Aabb2D::<i32>::from_xywh(10_000, 10_000, 40_000, 40_000))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_rtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_i32");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 1000);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_query_rect_n{}", n), |b| {
            b.iter_batched(
                Index::<i32, u32>::with_rtree,
                |mut idx| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        let _ = idx.insert(r, i as u32);
                    }
                    let hits: usize = idx
                        .query_rect(Aabb2D::new(10_000, 10_000, 50_000, 50_000))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("bulk_query_rect_n{}", n), |b| {
            b.iter_batched(
                || rects.clone(),
                |rects| {
                    let idx = Index::<i32, Aabb2D<i32>>::with_rtree_bulk(TreeParams::default(), rects);
                    let hits: usize = idx
                        .query_rect(Aabb2D::new(10_000, 10_000, 50_000, 50_000))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_rtree_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_f64");
    for &n in &[32usize, 64] {
        let rects = gen_grid_rects_f64(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_query_rect_n{}", n), |b| {
            b.iter_batched(
                Index::<f64, u32>::with_rtree,
                |mut idx| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        let _ = idx.insert(r, i as u32);
                    }
                    let hits: usize = idx
                        .query_rect(Aabb2D::new(100.0, 100.0, 500.0, 500.0))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_i32_airspace");
    let rects = gen_airspace_rects(4096, 1_000_000);
    let queries = gen_query_boxes(256, 1_000_000);
    let mut flat = Index::<i32, u32>::new();
    let mut tree = Index::<i32, u32>::with_rtree();
    for (i, r) in rects.iter().copied().enumerate() {
        let _ = flat.insert(r, i as u32);
        let _ = tree.insert(r, i as u32);
    }
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("flatvec_k8", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for p in &queries {
                total += flat.query_nearest(*p, 8).len();
            }
            black_box(total);
        })
    });
    group.bench_function("rtree_k8", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for p in &queries {
                total += tree.query_nearest(*p, 8).len();
            }
            black_box(total);
        })
    });
    group.bench_function("flatvec_within_20k", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for p in &queries {
                total += flat.query_within(*p, 20_000).len();
            }
            black_box(total);
        })
    });
    group.bench_function("rtree_within_20k", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for p in &queries {
                total += tree.query_within(*p, 20_000).len();
            }
            black_box(total);
        })
    });
    group.finish();
}

fn bench_remove_heavy_rtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_i32_remove_heavy");
    let rects = gen_airspace_rects(4096, 1_000_000);
    group.bench_function("remove_half_then_query", |b| {
        b.iter_batched(
            || {
                let mut idx = Index::<i32, u32>::with_rtree();
                let mut keys = Vec::new();
                for (i, r) in rects.iter().copied().enumerate() {
                    keys.push(idx.insert(r, i as u32));
                }
                (idx, keys)
            },
            |(mut idx, keys)| {
                for k in keys.into_iter().step_by(2) {
                    let _ = idx.remove(k);
                }
                let hits = idx
                    .query_rect(Aabb2D::<i32>::from_xywh(400_000, 400_000, 200_000, 200_000))
                    .count();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_i32_fanout");
    let rects = gen_airspace_rects(4096, 1_000_000);
    for (max, min) in [(8usize, 3usize), (16, 6), (32, 12)] {
        let Ok(params) = TreeParams::new(max, min) else {
            continue;
        };
        group.bench_function(format!("insert_query_max{}", max), |b| {
            b.iter_batched(
                || Index::<i32, u32>::with_rtree_params(params),
                |mut idx| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        let _ = idx.insert(r, i as u32);
                    }
                    let hits = idx
                        .query_rect(Aabb2D::<i32>::from_xywh(400_000, 400_000, 200_000, 200_000))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_flatvec,
    bench_rtree,
    bench_rtree_f64,
    bench_nearest,
    bench_remove_heavy_rtree,
    bench_fanout,
);
criterion_main!(benches);
