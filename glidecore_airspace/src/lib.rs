// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glidecore Airspace: airspace records on a flat integer projection, spatially indexed.
//!
//! On every position update a navigation computer needs the airspaces near the
//! aircraft without scanning the whole database. This crate keeps each airspace's
//! conservative bounding box in an R-tree ([`glidecore_index::RTree`], fan-out 16)
//! and answers:
//!
//! - [`AirspaceSpatialIndex::query_box`]: every airspace whose box intersects a box.
//! - [`AirspaceSpatialIndex::query_nearest`]: the `k` closest airspaces to a point.
//! - [`AirspaceSpatialIndex::query_range`]: every airspace within a distance of a point.
//!
//! Distances use the overlap-aware [`BoxDistance`](glidecore_index::BoxDistance):
//! an airspace whose box contains the point is at distance zero, so it always
//! ranks first and is always within range.
//!
//! The exact airspace boundary is owned elsewhere and referenced through an
//! [`Arc`](alloc::sync::Arc) handle; results are candidates for an exact test.
//!
//! # Example
//!
//! ```rust
//! use glidecore_airspace::{Airspace, AirspaceSpatialIndex, FlatBoundingBox, FlatGeoPoint};
//!
//! let ctr = Airspace::from_shape(FlatBoundingBox::around(FlatGeoPoint::new(0, 0), 5_000));
//! let danger = Airspace::from_shape(FlatBoundingBox::around(FlatGeoPoint::new(9_000, 0), 1_000));
//!
//! let mut index = AirspaceSpatialIndex::new();
//! index.insert(ctr.clone());
//! index.insert(danger.clone());
//!
//! let aircraft = FlatGeoPoint::new(4_000, 0);
//! let near = index.query_range(aircraft, 5_000);
//! assert_eq!(near.len(), 2);
//! assert_eq!(near[0].0, &ctr, "the containing airspace ranks first");
//!
//! index.remove(&danger).unwrap();
//! assert_eq!(index.query_range(aircraft, 5_000).len(), 1);
//! ```

#![no_std]

extern crate alloc;

pub mod airspace;
pub mod error;
pub mod flat;
pub mod index;

pub use airspace::{Airspace, AirspaceShape};
pub use error::AirspaceError;
pub use flat::{FlatBoundingBox, FlatGeoPoint};
pub use index::{AirspaceSpatialIndex, Nearby};
