// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Airspace lookups against `rstar` on the same generated airspace set.

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glidecore_airspace::{Airspace, AirspaceSpatialIndex, FlatBoundingBox, FlatGeoPoint};

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

type RstarAirspace = GeomWithData<Rectangle<[i64; 2]>, usize>;

const EXTENT: u32 = 2_000_000;

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
    fn point(&mut self) -> FlatGeoPoint {
        FlatGeoPoint::new(self.below(EXTENT), self.below(EXTENT))
    }
}

/// Mostly small control zones, with one FIR-sized area in every hundred.
fn gen_airspaces(count: usize) -> Vec<Airspace<FlatBoundingBox>> {
    let mut rng = Rng::new(0x5EC7_0A11_D00D_F00D);
    (0..count)
        .map(|i| {
            let center = rng.point();
            let radius = if i % 100 == 0 {
                rng.below(300_000) + 200_000
            } else {
                rng.below(20_000) + 1_000
            };
            Airspace::from_shape(FlatBoundingBox::around(center, radius))
        })
        .collect()
}

fn envelope(b: FlatBoundingBox) -> AABB<[i64; 2]> {
    AABB::from_corners(
        [i64::from(b.left()), i64::from(b.bottom())],
        [i64::from(b.right()), i64::from(b.top())],
    )
}

fn to_rstar(airspaces: &[Airspace<FlatBoundingBox>]) -> Vec<RstarAirspace> {
    airspaces
        .iter()
        .enumerate()
        .map(|(i, a)| GeomWithData::new(Rectangle::from_aabb(envelope(a.bounds())), i))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("airspace_external_build");
    for &n in &[1_000usize, 10_000] {
        let airspaces = gen_airspaces(n);
        let flat = to_rstar(&airspaces);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("glidecore_insert_n{}", n), |b| {
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

        group.bench_function(format!("glidecore_bulk_n{}", n), |b| {
            b.iter_batched(
                || airspaces.clone(),
                |airspaces| {
                    let idx = AirspaceSpatialIndex::bulk_load(airspaces);
                    black_box(idx.len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_bulk_n{}", n), |b| {
            b.iter_batched(
                || flat.clone(),
                |rects| {
                    let tree = RTree::bulk_load(rects);
                    black_box(tree.size());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("airspace_external_lookups");
    let airspaces = gen_airspaces(10_000);
    let tree = RTree::bulk_load(to_rstar(&airspaces));
    let idx = AirspaceSpatialIndex::bulk_load(airspaces);

    let mut rng = Rng::new(0x0B5E_55ED_C0FF_EE00);
    let fixes: Vec<FlatGeoPoint> = (0..256).map(|_| rng.point()).collect();
    group.throughput(Throughput::Elements(fixes.len() as u64));

    group.bench_function("glidecore_point", |b| {
        b.iter(|| {
            let total: usize = fixes.iter().map(|p| idx.query_point(*p).count()).sum();
            black_box(total);
        })
    });
    group.bench_function("rstar_point", |b| {
        b.iter(|| {
            let total: usize = fixes
                .iter()
                .map(|p| {
                    let at = AABB::from_point([i64::from(p.x), i64::from(p.y)]);
                    tree.locate_in_envelope_intersecting(&at).count()
                })
                .sum();
            black_box(total);
        })
    });

    // Everything within 25 km of a fix, as a task planner asks before drawing.
    group.bench_function("glidecore_box_25k", |b| {
        b.iter(|| {
            let total: usize = fixes
                .iter()
                .map(|p| idx.query_box(FlatBoundingBox::around(*p, 25_000)).count())
                .sum();
            black_box(total);
        })
    });
    group.bench_function("rstar_box_25k", |b| {
        b.iter(|| {
            let total: usize = fixes
                .iter()
                .map(|p| {
                    let area = envelope(FlatBoundingBox::around(*p, 25_000));
                    tree.locate_in_envelope_intersecting(&area).count()
                })
                .sum();
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_lookups);
criterion_main!(benches);
