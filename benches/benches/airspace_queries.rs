// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glidecore_airspace::{Airspace, AirspaceSpatialIndex, FlatBoundingBox, FlatGeoPoint};

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

fn gen_airspaces(count: usize) -> Vec<Airspace<FlatBoundingBox>> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    (0..count)
        .map(|_| {
            let center = FlatGeoPoint::new(rng.below(2_000_000), rng.below(2_000_000));
            let radius = rng.below(40_000) + 500;
            Airspace::from_shape(FlatBoundingBox::around(center, radius))
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("airspace_build");
    for &n in &[1_000usize, 10_000] {
        let airspaces = gen_airspaces(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_n{}", n), |b| {
            b.iter_batched(
                AirspaceSpatialIndex::<FlatBoundingBox>::new,
                |mut idx| {
                    for a in airspaces.iter().cloned() {
                        let _ = idx.insert(a);
                    }
                    black_box(idx.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("bulk_n{}", n), |b| {
            b.iter_batched(
                || airspaces.clone(),
                |airspaces| {
                    let idx = AirspaceSpatialIndex::bulk_load(airspaces);
                    black_box(idx.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("airspace_queries");
    let idx = AirspaceSpatialIndex::bulk_load(gen_airspaces(10_000));
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let fixes: Vec<FlatGeoPoint> = (0..256)
        .map(|_| FlatGeoPoint::new(rng.below(2_000_000), rng.below(2_000_000)))
        .collect();
    group.throughput(Throughput::Elements(fixes.len() as u64));
    group.bench_function("point", |b| {
        b.iter(|| {
            let total: usize = fixes.iter().map(|p| idx.query_point(*p).count()).sum();
            black_box(total);
        })
    });
    group.bench_function("nearest_k5", |b| {
        b.iter(|| {
            let total: usize = fixes.iter().map(|p| idx.query_nearest(*p, 5).len()).sum();
            black_box(total);
        })
    });
    group.bench_function("range_25k", |b| {
        b.iter(|| {
            let total: usize = fixes.iter().map(|p| idx.query_range(*p, 25_000).len()).sum();
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_queries);
criterion_main!(benches);
