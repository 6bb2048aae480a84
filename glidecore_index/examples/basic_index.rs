// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Glidecore Index: insert, remove, and query by box distance.

use glidecore_index::{Aabb2D, Index};

fn main() {
    let mut idx = Index::<i32, u32>::with_rtree();
    let k1 = idx.insert(Aabb2D::new(0, 0, 10, 10), 1);
    let _k2 = idx.insert(Aabb2D::new(5, 5, 15, 15), 2);
    let _k3 = idx.insert(Aabb2D::new(40, 0, 50, 10), 3);

    // Query a point
    let hits: Vec<_> = idx.query_point(6, 6).collect();
    println!("hits at (6,6): {:?}", hits);

    // Rank by distance from a query box; overlapping entries come first.
    let target = Aabb2D::new(8, 8, 8, 8);
    for hit in idx.query_nearest(target, 3) {
        println!("{:?} -> {} at {:?}", hit.key, hit.payload, hit.distance);
    }

    let removed = idx.remove(k1);
    println!("removed {:?}; stale lookup: {:?}", removed, idx.get(k1));
}
