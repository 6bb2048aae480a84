// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of observation zones.

use kurbo::Point;

use crate::cylinder::CylinderZone;
use crate::error::ZoneError;
use crate::geo::Located;
use crate::sector::SectorZone;
use crate::symmetric::SymmetricSectorZone;

/// Shape tag of an observation zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ZoneShape {
    /// Circle around the task point.
    Cylinder,
    /// Sector with freely set radials.
    Sector,
    /// Leg-adaptive sector of free radius and width.
    SymmetricQuadrant,
    /// Leg-adaptive 90° sector with FAI radii.
    FaiSector,
}

/// An observation zone around a task point.
#[derive(Clone, Debug, PartialEq)]
pub enum ObservationZone {
    /// See [`CylinderZone`].
    Cylinder(CylinderZone),
    /// See [`SectorZone`].
    Sector(SectorZone),
    /// See [`SymmetricSectorZone`].
    SymmetricSector(SymmetricSectorZone),
}

impl ObservationZone {
    /// Shape tag.
    pub const fn shape(&self) -> ZoneShape {
        match self {
            Self::Cylinder(_) => ZoneShape::Cylinder,
            Self::Sector(_) => ZoneShape::Sector,
            Self::SymmetricSector(z) => z.shape(),
        }
    }

    /// The task point the zone is placed on.
    pub const fn reference(&self) -> Point {
        match self {
            Self::Cylinder(z) => z.reference(),
            Self::Sector(z) => z.reference(),
            Self::SymmetricSector(z) => z.reference(),
        }
    }

    /// Radius in metres.
    pub const fn radius(&self) -> f64 {
        match self {
            Self::Cylinder(z) => z.radius(),
            Self::Sector(z) => z.radius(),
            Self::SymmetricSector(z) => z.radius(),
        }
    }

    /// Change the radius; the zone is unchanged on error.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ZoneError> {
        match self {
            Self::Cylinder(z) => z.set_radius(radius),
            Self::Sector(z) => z.set_radius(radius),
            Self::SymmetricSector(z) => z.set_radius(radius),
        }
    }

    /// Whether the aircraft has reached the zone.
    pub fn is_in_sector(&self, aircraft: &impl Located) -> bool {
        match self {
            Self::Cylinder(z) => z.is_in_sector(aircraft),
            Self::Sector(z) => z.is_in_sector(aircraft),
            Self::SymmetricSector(z) => z.is_in_sector(aircraft),
        }
    }

    /// Point on the zone boundary for `t` in `[0, 1]`.
    pub fn boundary_parametric(&self, t: f64) -> Point {
        match self {
            Self::Cylinder(z) => z.boundary_parametric(t),
            Self::Sector(z) => z.boundary_parametric(t),
            Self::SymmetricSector(z) => z.boundary_parametric(t),
        }
    }

    /// Where the boundary walk turns from the outward radial onto the arc and
    /// from the arc onto the inward radial. A cylinder's walk is a plain circle
    /// and has none.
    pub fn breakpoints(&self) -> Option<(f64, f64)> {
        match self {
            Self::Cylinder(_) => None,
            Self::Sector(z) => Some(z.breakpoints()),
            Self::SymmetricSector(z) => Some(z.breakpoints()),
        }
    }

    /// `samples` evenly spaced boundary points, first and last included.
    pub fn boundary(&self, samples: usize) -> Vec<Point> {
        match samples {
            0 => Vec::new(),
            1 => vec![self.boundary_parametric(0.0)],
            n => {
                let last = (n - 1) as f64;
                (0..n)
                    .map(|i| self.boundary_parametric(i as f64 / last))
                    .collect()
            }
        }
    }

    /// Distance credited to a flight that misses the zone.
    pub const fn score_adjustment(&self) -> f64 {
        match self {
            Self::Cylinder(z) => z.score_adjustment(),
            Self::Sector(z) => z.score_adjustment(),
            Self::SymmetricSector(z) => z.score_adjustment(),
        }
    }

    /// Same shape and parameters; placement is ignored.
    pub fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Cylinder(a), Self::Cylinder(b)) => a.equivalent(b),
            (Self::Sector(a), Self::Sector(b)) => a.equivalent(b),
            (Self::SymmetricSector(a), Self::SymmetricSector(b)) => a.equivalent(b),
            _ => false,
        }
    }

    /// Independent copy, optionally moved to a new reference point.
    pub fn clone_at(&self, reference: Option<Point>) -> Self {
        match self {
            Self::Cylinder(z) => Self::Cylinder(z.clone_at(reference)),
            Self::Sector(z) => Self::Sector(z.clone_at(reference)),
            Self::SymmetricSector(z) => Self::SymmetricSector(z.clone_at(reference)),
        }
    }

    /// Re-aim the zone from the surrounding task points. Only symmetric sectors
    /// follow the legs; other shapes ignore the call.
    pub fn set_legs(
        &mut self,
        previous: Option<Point>,
        current: Point,
        next: Option<Point>,
    ) -> Result<(), ZoneError> {
        match self {
            Self::SymmetricSector(z) => z.set_legs(previous, current, next),
            Self::Cylinder(_) | Self::Sector(_) => Ok(()),
        }
    }
}

impl From<CylinderZone> for ObservationZone {
    fn from(z: CylinderZone) -> Self {
        Self::Cylinder(z)
    }
}

impl From<SectorZone> for ObservationZone {
    fn from(z: SectorZone) -> Self {
        Self::Sector(z)
    }
}

impl From<SymmetricSectorZone> for ObservationZone {
    fn from(z: SymmetricSectorZone) -> Self {
        Self::SymmetricSector(z)
    }
}
