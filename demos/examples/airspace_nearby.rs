// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Airspace lookup basics.
//!
//! Index a handful of airspaces, then ask which ones contain, surround, or lie
//! near an aircraft position.
//!
//! Run:
//! - `cargo run -p glidecore_demos --example airspace_nearby`

use std::sync::Arc;

use glidecore_airspace::{
    Airspace, AirspaceShape, AirspaceSpatialIndex, FlatBoundingBox, FlatGeoPoint,
};

#[derive(Debug)]
struct Circle {
    name: &'static str,
    center: FlatGeoPoint,
    radius: i32,
}

impl AirspaceShape for Circle {
    fn bounding_box(&self) -> FlatBoundingBox {
        FlatBoundingBox::around(self.center, self.radius)
    }
}

fn circle(name: &'static str, x: i32, y: i32, radius: i32) -> Airspace<Circle> {
    Airspace::from_shape(Circle {
        name,
        center: FlatGeoPoint::new(x, y),
        radius,
    })
}

fn main() {
    let tma = circle("TMA", 0, 0, 40_000);
    let ctr = circle("CTR", 2_000, -1_000, 8_000);
    let danger = circle("D-12", 30_000, 25_000, 3_000);
    let glider = circle("Glider sector", -60_000, 10_000, 15_000);

    let mut idx = AirspaceSpatialIndex::bulk_load([tma.clone(), ctr.clone(), danger, glider]);
    println!("indexed {} airspaces", idx.len());

    let aircraft = FlatGeoPoint::new(5_000, 3_000);
    let inside: Vec<_> = idx.query_point(aircraft).map(|a| a.shape().name).collect();
    println!("boxes around {aircraft:?}: {inside:?}");

    // Containing airspaces come first at distance zero.
    for (a, d) in idx.query_nearest(aircraft, 3) {
        println!(
            "  {:<14} dx={:>6} dy={:>6} overlap={}",
            a.shape().name,
            d.dx,
            d.dy,
            d.is_overlap()
        );
    }

    let near: Vec<_> = idx
        .query_range(aircraft, 30_000)
        .into_iter()
        .map(|(a, _)| a.shape().name)
        .collect();
    println!("within 30 km: {near:?}");

    // Removal is by identity: a fresh airspace with the same geometry is a
    // different record.
    let lookalike = Airspace::new(Arc::new(Circle {
        name: "CTR",
        center: FlatGeoPoint::new(2_000, -1_000),
        radius: 8_000,
    }));
    assert!(idx.remove(&lookalike).is_err(), "look-alike must not match");
    let removed = idx.remove(&ctr).expect("CTR is indexed");
    assert_eq!(removed, ctr);
    assert!(idx.contains(&tma));
    println!("after removing CTR: {} airspaces", idx.len());
}
