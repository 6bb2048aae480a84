// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! FAI sectors along a task.
//!
//! Place a start, two turn points and a finish, then aim each FAI sector from
//! its neighbouring task points.
//!
//! Run:
//! - `cargo run -p glidecore_demos --example fai_sector_legs`

use glidecore_zones::{ObservationZone, SymmetricSectorZone};
use kurbo::Point;

fn main() {
    let task = [
        Point::new(0.0, 0.0),
        Point::new(0.0, 100_000.0),
        Point::new(80_000.0, 60_000.0),
        Point::new(0.0, 0.0),
    ];

    let last = task.len() - 1;
    let mut zones: Vec<ObservationZone> = task
        .iter()
        .enumerate()
        .map(|(i, &p)| SymmetricSectorZone::fai_sector(p, i != 0 && i != last).into())
        .collect();

    for (i, zone) in zones.iter_mut().enumerate() {
        let previous = i.checked_sub(1).map(|j| task[j]);
        let next = task.get(i + 1).copied();
        zone.set_legs(previous, task[i], next)
            .expect("every task point has a neighbour");
    }

    for (i, zone) in zones.iter().enumerate() {
        let ObservationZone::SymmetricSector(z) = zone else {
            continue;
        };
        println!(
            "point {i}: r={:>6} m, radials {:>6.1}°..{:>6.1}°, bisector {:>6.1}°",
            z.radius(),
            z.start_radial().degrees(),
            z.end_radial().degrees(),
            z.bisector().degrees()
        );
    }

    // Start and finish share a location and radius, but face different ways.
    assert!(!zones[0].equivalent(&zones[last]));
    let moved = zones[1].clone_at(Some(Point::new(5_000.0, 5_000.0)));
    assert!(moved.equivalent(&zones[1]));
}
