// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cylinder observation zone.

use kurbo::Point;

use crate::error::ZoneError;
use crate::geo::{Angle, GeoVector, Located};

/// Slack, in metres, granted to points on a zone's outer boundary.
pub const RADIUS_TOLERANCE: f64 = 1e-6;

pub(crate) fn validate_radius(radius: f64) -> Result<f64, ZoneError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(ZoneError::InvalidRadius(radius))
    }
}

/// Circle of fixed radius around a task point.
///
/// Also the shared base of the sector zones, which embed it for their reference
/// point and radius.
#[derive(Clone, Debug, PartialEq)]
pub struct CylinderZone {
    reference: Point,
    radius: f64,
}

impl CylinderZone {
    /// Create a cylinder. Fails for negative or non-finite radii.
    pub fn new(reference: Point, radius: f64) -> Result<Self, ZoneError> {
        Ok(Self {
            reference,
            radius: validate_radius(radius)?,
        })
    }

    /// Cylinder with a radius already known to be valid.
    pub(crate) const fn with_valid_radius(reference: Point, radius: f64) -> Self {
        Self { reference, radius }
    }

    /// Centre of the zone.
    pub const fn reference(&self) -> Point {
        self.reference
    }

    /// Radius in metres.
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Change the radius; the zone is unchanged on error.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ZoneError> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }

    /// Whether the aircraft is inside or on the circle.
    pub fn is_in_sector(&self, aircraft: &impl Located) -> bool {
        self.reference.distance(aircraft.location()) <= self.radius + RADIUS_TOLERANCE
    }

    /// Point on the circle, clockwise from north as `t` goes from 0 to 1.
    pub fn boundary_parametric(&self, t: f64) -> Point {
        GeoVector::new(self.radius, Angle::FULL_CIRCLE * t).end_point(self.reference)
    }

    /// Scored distance is measured to the cylinder edge, so a miss is
    /// credited with the radius.
    pub const fn score_adjustment(&self) -> f64 {
        self.radius
    }

    /// Same radius; placement is ignored.
    #[allow(clippy::float_cmp, reason = "Zone shapes are compared exactly.")]
    pub fn equivalent(&self, other: &Self) -> bool {
        self.radius == other.radius
    }

    /// Independent copy, optionally moved to a new reference point.
    pub fn clone_at(&self, reference: Option<Point>) -> Self {
        Self {
            reference: reference.unwrap_or(self.reference),
            radius: self.radius,
        }
    }
}
