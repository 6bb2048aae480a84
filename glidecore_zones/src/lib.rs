// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glidecore Zones: Kurbo-native observation zones for soaring tasks.
//!
//! An observation zone is the region around a task point that an aircraft has
//! to reach for the point to count. This crate models the common shapes:
//!
//! - [`CylinderZone`]: a circle of fixed radius.
//! - [`SectorZone`]: a circular sector between two radials, swept clockwise.
//! - [`SymmetricSectorZone`]: a sector of fixed width that re-aims itself from
//!   the neighbouring task points, including the 90° FAI sector.
//!
//! [`ObservationZone`] is the closed sum over these, dispatching containment
//! tests, parametric boundary walks, scoring adjustments, shape equivalence and
//! re-centred copies.
//!
//! Geometry lives in a local metric plane: [`kurbo::Point`]s in metres, x east,
//! y north, with [`Angle`] bearings clockwise from north. Projection from
//! geographic coordinates is up to the caller.
//!
//! # Example
//!
//! ```rust
//! use glidecore_zones::{ObservationZone, SymmetricSectorZone};
//! use kurbo::Point;
//!
//! let previous = Point::new(-20_000.0, 0.0);
//! let turnpoint = Point::new(0.0, 0.0);
//! let next = Point::new(0.0, -30_000.0);
//!
//! let mut oz: ObservationZone = SymmetricSectorZone::fai_sector(turnpoint, true).into();
//! oz.set_legs(Some(previous), turnpoint, Some(next)).unwrap();
//!
//! // The sector opens to the south-west, between the two legs.
//! assert!(oz.is_in_sector(&Point::new(-3_000.0, -3_000.0)));
//! assert!(!oz.is_in_sector(&Point::new(3_000.0, 3_000.0)));
//!
//! // Moving a zone keeps its shape.
//! let moved = oz.clone_at(Some(Point::new(5_000.0, 5_000.0)));
//! assert!(moved.equivalent(&oz));
//! ```
//!
//! ### Float semantics
//!
//! Radii must be finite and non-negative. Containment accepts points up to
//! [`RADIUS_TOLERANCE`] metres outside the radius or beside a radial, so points
//! walked onto the boundary stay inside even right next to the apex.
//! Equivalence compares radii and radials exactly.

pub mod cylinder;
pub mod error;
pub mod geo;
pub mod sector;
pub mod symmetric;
pub mod zone;

pub use cylinder::{CylinderZone, RADIUS_TOLERANCE};
pub use error::ZoneError;
pub use geo::{Angle, GeoVector, Located};
pub use sector::SectorZone;
pub use symmetric::SymmetricSectorZone;
pub use zone::{ObservationZone, ZoneShape};
