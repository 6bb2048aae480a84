// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation zone boundaries.
//!
//! Trace the boundary of a cylinder and a sector, and check a few aircraft
//! positions against them.
//!
//! Run:
//! - `cargo run -p glidecore_demos --example sector_boundary`

use glidecore_zones::{Angle, CylinderZone, ObservationZone, SectorZone};
use kurbo::Point;

fn main() {
    let turnpoint = Point::new(0.0, 0.0);
    let zones: [ObservationZone; 2] = [
        CylinderZone::new(turnpoint, 500.0)
            .expect("valid radius")
            .into(),
        SectorZone::new(
            turnpoint,
            3_000.0,
            Angle::from_degrees(300.0),
            Angle::from_degrees(60.0),
        )
        .expect("valid radius")
        .into(),
    ];

    for zone in &zones {
        println!("{:?} r={} m", zone.shape(), zone.radius());
        for p in zone.boundary(9) {
            println!("  ({:>9.1}, {:>9.1})", p.x, p.y);
        }
        for aircraft in [Point::new(0.0, 400.0), Point::new(0.0, 2_000.0), Point::new(0.0, -400.0)] {
            println!("  {aircraft:?} inside: {}", zone.is_in_sector(&aircraft));
        }
        println!("  score adjustment: {} m", zone.score_adjustment());
    }

    if let ObservationZone::Sector(sector) = &zones[1] {
        let (b1, b2) = sector.breakpoints();
        println!("sector walk turns at t={b1:.3} and t={b2:.3}");
        println!("  start radial end: {:?}", sector.sector_start());
        println!("  end radial end:   {:?}", sector.sector_end());
    }
}
