// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector centred on the bisector of the adjacent task legs.

use kurbo::Point;

use crate::cylinder::CylinderZone;
use crate::error::ZoneError;
use crate::geo::{Angle, GeoVector, Located};
use crate::sector::SectorZone;
use crate::zone::ZoneShape;

/// A sector of fixed angular width whose radials follow the task legs.
///
/// The radials are not set directly: [`SymmetricSectorZone::set_legs`] derives
/// a bisector from the neighbouring task points and places the radials half the
/// sector angle either side of it. Until legs are supplied the sector is
/// centred on north.
#[derive(Clone, Debug, PartialEq)]
pub struct SymmetricSectorZone {
    sector: SectorZone,
    sector_angle: Angle,
    shape: ZoneShape,
}

impl SymmetricSectorZone {
    /// Radius of an FAI sector at a turn point.
    pub const FAI_TURNPOINT_RADIUS: f64 = 10_000.0;
    /// Radius of an FAI sector at a start or finish.
    pub const FAI_ENDPOINT_RADIUS: f64 = 1_000.0;

    /// A symmetric quadrant-style sector of any width in `0°..=360°`.
    pub fn new(reference: Point, radius: f64, sector_angle: Angle) -> Result<Self, ZoneError> {
        let width = sector_angle.degrees();
        if !(0.0..=360.0).contains(&width) {
            return Err(ZoneError::InvalidSectorAngle(width));
        }
        let base = CylinderZone::new(reference, radius)?;
        Ok(Self::build(ZoneShape::SymmetricQuadrant, base, sector_angle))
    }

    /// The 90° FAI sector; 10 km deep at turn points, 1 km otherwise.
    pub fn fai_sector(reference: Point, is_turnpoint: bool) -> Self {
        let radius = if is_turnpoint {
            Self::FAI_TURNPOINT_RADIUS
        } else {
            Self::FAI_ENDPOINT_RADIUS
        };
        let base = CylinderZone::with_valid_radius(reference, radius);
        Self::build(ZoneShape::FaiSector, base, Angle::QUARTER_CIRCLE)
    }

    fn build(shape: ZoneShape, base: CylinderZone, sector_angle: Angle) -> Self {
        let half = sector_angle.half();
        Self {
            sector: SectorZone::from_base(base, -half, half),
            sector_angle,
            shape,
        }
    }

    /// Which symmetric shape this is.
    pub const fn shape(&self) -> ZoneShape {
        self.shape
    }

    /// Angular width between the radials.
    pub const fn sector_angle(&self) -> Angle {
        self.sector_angle
    }

    /// Far end of the start radial.
    pub const fn sector_start(&self) -> Point {
        self.sector.sector_start()
    }

    /// Far end of the end radial.
    pub const fn sector_end(&self) -> Point {
        self.sector.sector_end()
    }

    /// Apex of the sector.
    pub const fn reference(&self) -> Point {
        self.sector.reference()
    }

    /// Radius in metres.
    pub const fn radius(&self) -> f64 {
        self.sector.radius()
    }

    /// Most counter-clockwise radial.
    pub const fn start_radial(&self) -> Angle {
        self.sector.start_radial()
    }

    /// Most clockwise radial.
    pub const fn end_radial(&self) -> Angle {
        self.sector.end_radial()
    }

    /// Direction the sector opens towards.
    pub fn bisector(&self) -> Angle {
        (self.start_radial() + self.sector_angle.half()).as_bearing()
    }

    /// Change the radius; the zone is unchanged on error.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ZoneError> {
        self.sector.set_radius(radius)
    }

    /// Re-aim the sector from the surrounding task points.
    ///
    /// - both neighbours: the bisector halves the angle between the bearings
    ///   from `current` to `previous` and from `current` to `next`; when those
    ///   are exactly opposite it lies clockwise of the bearing to `previous`;
    /// - only `next` (start point): the reciprocal of the outgoing leg;
    /// - only `previous` (finish point): the direction of the incoming leg;
    /// - neither: [`ZoneError::NoAdjacentLegs`], and the zone is untouched.
    pub fn set_legs(
        &mut self,
        previous: Option<Point>,
        current: Point,
        next: Option<Point>,
    ) -> Result<(), ZoneError> {
        let bisector = match (previous, next) {
            (Some(previous), Some(next)) => {
                let to_previous = GeoVector::between(current, previous).bearing;
                let to_next = GeoVector::between(current, next).bearing;
                to_previous + (to_next - to_previous).as_delta().half()
            }
            (None, Some(next)) => GeoVector::between(current, next).bearing.reciprocal(),
            (Some(previous), None) => GeoVector::between(previous, current).bearing,
            (None, None) => {
                log::warn!("set_legs on {:?} without adjacent legs", self.shape);
                return Err(ZoneError::NoAdjacentLegs);
            }
        };
        let half = self.sector_angle.half();
        self.sector.set_radials(bisector - half, bisector + half);
        log::debug!(
            "{:?} at {:?} aimed at {:.3}°",
            self.shape,
            self.reference(),
            bisector.as_bearing().degrees()
        );
        Ok(())
    }

    /// Whether the aircraft is within the radius and between the radials.
    pub fn is_in_sector(&self, aircraft: &impl Located) -> bool {
        self.sector.contains(aircraft.location(), self.sector_angle)
    }

    /// Point on the closed boundary walk; see [`SectorZone::boundary_parametric`].
    pub fn boundary_parametric(&self, t: f64) -> Point {
        self.sector.walk(t, self.sector_angle)
    }

    /// Breakpoints of [`SymmetricSectorZone::boundary_parametric`], measured
    /// over an arc of the full sector angle.
    pub fn breakpoints(&self) -> (f64, f64) {
        self.sector.breakpoints_for(self.sector_angle)
    }

    /// Symmetric sectors carry no scoring adjustment.
    pub const fn score_adjustment(&self) -> f64 {
        0.0
    }

    /// Same shape, radius, radials and sector angle; placement is ignored.
    #[allow(clippy::float_cmp, reason = "Zone shapes are compared exactly.")]
    pub fn equivalent(&self, other: &Self) -> bool {
        self.shape == other.shape
            && self.sector_angle == other.sector_angle
            && self.sector.equivalent(&other.sector)
    }

    /// Independent copy, optionally moved to a new apex.
    pub fn clone_at(&self, reference: Option<Point>) -> Self {
        Self {
            sector: self.sector.clone_at(reference),
            sector_angle: self.sector_angle,
            shape: self.shape,
        }
    }
}
