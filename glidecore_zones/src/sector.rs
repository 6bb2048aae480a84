// Copyright 2025 the Glidecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular sector observation zone.

use kurbo::Point;

use crate::cylinder::{CylinderZone, RADIUS_TOLERANCE};
use crate::error::ZoneError;
use crate::geo::{Angle, GeoVector, Located};

/// Circular sector between two radials, swept clockwise from `start_radial`
/// to `end_radial`.
///
/// The far ends of both radials are cached as [`SectorZone::sector_start`] and
/// [`SectorZone::sector_end`]; every mutator refreshes them before returning.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorZone {
    base: CylinderZone,
    start_radial: Angle,
    end_radial: Angle,
    sector_start: Point,
    sector_end: Point,
}

impl SectorZone {
    /// Create a sector. Radials are normalized to `[0°, 360°)`.
    pub fn new(
        reference: Point,
        radius: f64,
        start_radial: Angle,
        end_radial: Angle,
    ) -> Result<Self, ZoneError> {
        let base = CylinderZone::new(reference, radius)?;
        Ok(Self::from_base(base, start_radial, end_radial))
    }

    pub(crate) fn from_base(base: CylinderZone, start_radial: Angle, end_radial: Angle) -> Self {
        let reference = base.reference();
        let mut zone = Self {
            base,
            start_radial: start_radial.as_bearing(),
            end_radial: end_radial.as_bearing(),
            sector_start: reference,
            sector_end: reference,
        };
        zone.update_sector();
        zone
    }

    /// Apex of the sector.
    pub const fn reference(&self) -> Point {
        self.base.reference()
    }

    /// Radius in metres.
    pub const fn radius(&self) -> f64 {
        self.base.radius()
    }

    /// Most counter-clockwise radial.
    pub const fn start_radial(&self) -> Angle {
        self.start_radial
    }

    /// Most clockwise radial.
    pub const fn end_radial(&self) -> Angle {
        self.end_radial
    }

    /// Far end of the start radial.
    pub const fn sector_start(&self) -> Point {
        self.sector_start
    }

    /// Far end of the end radial.
    pub const fn sector_end(&self) -> Point {
        self.sector_end
    }

    /// Clockwise angle from the start radial to the end radial, in `[0°, 360°)`.
    pub fn sweep(&self) -> Angle {
        (self.end_radial - self.start_radial).as_bearing()
    }

    /// Change the radius; the zone is unchanged on error.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ZoneError> {
        self.base.set_radius(radius)?;
        self.update_sector();
        Ok(())
    }

    /// Move the start radial.
    pub fn set_start_radial(&mut self, radial: Angle) {
        self.start_radial = radial.as_bearing();
        self.update_sector();
    }

    /// Move the end radial.
    pub fn set_end_radial(&mut self, radial: Angle) {
        self.end_radial = radial.as_bearing();
        self.update_sector();
    }

    pub(crate) fn set_radials(&mut self, start: Angle, end: Angle) {
        self.start_radial = start.as_bearing();
        self.end_radial = end.as_bearing();
        self.update_sector();
    }

    fn update_sector(&mut self) {
        let reference = self.reference();
        let radius = self.radius();
        self.sector_start = GeoVector::new(radius, self.start_radial).end_point(reference);
        self.sector_end = GeoVector::new(radius, self.end_radial).end_point(reference);
    }

    /// Whether the aircraft is within the radius and between the radials.
    ///
    /// The apex and the boundary count as inside. Points outside the radials
    /// are accepted while their distance to the nearer radial is at most
    /// [`RADIUS_TOLERANCE`].
    pub fn is_in_sector(&self, aircraft: &impl Located) -> bool {
        self.contains(aircraft.location(), self.sweep())
    }

    pub(crate) fn contains(&self, location: Point, sweep: Angle) -> bool {
        let v = GeoVector::between(self.reference(), location);
        if v.distance <= RADIUS_TOLERANCE {
            return true;
        }
        if v.distance > self.radius() + RADIUS_TOLERANCE {
            return false;
        }
        let offset = (v.bearing - self.start_radial).as_bearing().degrees();
        let sweep = sweep.degrees();
        if offset <= sweep {
            return true;
        }
        // Overshoot past the end radial, or short of the start radial.
        let overshoot = (offset - sweep).min(Angle::FULL_CIRCLE.degrees() - offset);
        overshoot < Angle::QUARTER_CIRCLE.degrees()
            && v.distance * overshoot.to_radians().sin() <= RADIUS_TOLERANCE
    }

    /// Point on the closed boundary walk: out along the start radial, clockwise
    /// along the arc, and back in along the end radial.
    ///
    /// `t` is the fraction of the total walk length, clamped to `[0, 1]`. Both
    /// ends of the walk are the apex.
    pub fn boundary_parametric(&self, t: f64) -> Point {
        self.walk(t, self.sweep())
    }

    pub(crate) fn walk(&self, t: f64, sweep: Angle) -> Point {
        let reference = self.reference();
        let radius = self.radius();
        let arc = radius * sweep.radians();
        let total = 2.0 * radius + arc;
        if total <= 0.0 {
            return reference;
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let along = t * total;
        let v = if along < radius {
            GeoVector::new(along, self.start_radial)
        } else if along < radius + arc {
            let bearing = self.start_radial + sweep * ((along - radius) / arc);
            GeoVector::new(radius, bearing)
        } else {
            let inward = (along - radius - arc).min(radius);
            GeoVector::new(radius - inward, self.end_radial)
        };
        v.end_point(reference)
    }

    /// Breakpoints of [`SectorZone::boundary_parametric`]: where the outward
    /// radial meets the arc, and where the arc meets the inward radial.
    pub fn breakpoints(&self) -> (f64, f64) {
        self.breakpoints_for(self.sweep())
    }

    pub(crate) fn breakpoints_for(&self, sweep: Angle) -> (f64, f64) {
        let radius = self.radius();
        let arc = radius * sweep.radians();
        let total = 2.0 * radius + arc;
        if total <= 0.0 {
            return (0.0, 0.0);
        }
        (radius / total, (radius + arc) / total)
    }

    /// A plain sector carries no scoring adjustment.
    pub const fn score_adjustment(&self) -> f64 {
        0.0
    }

    /// Same radius and radials; placement is ignored.
    #[allow(clippy::float_cmp, reason = "Zone shapes are compared exactly.")]
    pub fn equivalent(&self, other: &Self) -> bool {
        self.base.equivalent(&other.base)
            && self.start_radial == other.start_radial
            && self.end_radial == other.end_radial
    }

    /// Independent copy, optionally moved to a new apex.
    pub fn clone_at(&self, reference: Option<Point>) -> Self {
        let mut zone = Self {
            base: self.base.clone_at(reference),
            ..self.clone()
        };
        zone.update_sector();
        zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-6
    }

    fn quadrant() -> SectorZone {
        SectorZone::new(
            Point::ORIGIN,
            1000.0,
            Angle::from_degrees(45.0),
            Angle::from_degrees(135.0),
        )
        .unwrap()
    }

    #[test]
    fn cached_endpoints_follow_mutators() {
        let mut z = quadrant();
        z.set_start_radial(Angle::from_degrees(-90.0));
        assert_eq!(z.start_radial(), Angle::from_degrees(270.0));
        assert!(close(z.sector_start(), Point::new(-1000.0, 0.0)));
        z.set_end_radial(Angle::ZERO);
        assert!(close(z.sector_end(), Point::new(0.0, 1000.0)));
        z.set_radius(2000.0).unwrap();
        assert!(close(z.sector_end(), Point::new(0.0, 2000.0)));
        assert!(z.set_radius(-1.0).is_err());
        assert!(close(z.sector_end(), Point::new(0.0, 2000.0)));
    }

    #[test]
    fn containment_respects_radials_and_radius() {
        let z = quadrant();
        assert!(z.is_in_sector(&Point::new(500.0, 0.0)));
        assert!(z.is_in_sector(&Point::ORIGIN), "apex is inside");
        assert!(!z.is_in_sector(&Point::new(0.0, 500.0)), "north is outside 45..135");
        assert!(!z.is_in_sector(&Point::new(1000.1, 0.0)));
        assert!(z.is_in_sector(&z.sector_start()));
        assert!(z.is_in_sector(&z.sector_end()));
    }

    #[test]
    fn containment_across_north() {
        let z = SectorZone::new(
            Point::ORIGIN,
            100.0,
            Angle::from_degrees(300.0),
            Angle::from_degrees(60.0),
        )
        .unwrap();
        assert!(z.is_in_sector(&Point::new(0.0, 50.0)));
        assert!(z.is_in_sector(&Point::new(-40.0, 50.0)));
        assert!(!z.is_in_sector(&Point::new(0.0, -50.0)));
        assert_eq!(z.sweep(), Angle::from_degrees(120.0));
    }

    #[test]
    fn boundary_walk_breakpoints() {
        let z = quadrant();
        let (b1, b2) = z.breakpoints();
        let l = 1000.0;
        let c1 = 1000.0 * core::f64::consts::FRAC_PI_2;
        assert!((b1 - l / (2.0 * l + c1)).abs() < 1e-12);
        assert!((b2 - (l + c1) / (2.0 * l + c1)).abs() < 1e-12);
        assert!(close(z.boundary_parametric(0.0), z.reference()));
        assert!(close(z.boundary_parametric(b1), z.sector_start()));
        assert!(close(z.boundary_parametric(b2), z.sector_end()));
        assert!(close(z.boundary_parametric(1.0), z.reference()));
        // Halfway along the arc is due east.
        let mid = z.boundary_parametric(0.5 * (b1 + b2));
        assert!(close(mid, Point::new(1000.0, 0.0)));
    }

    #[test]
    fn degenerate_sectors_stay_finite() {
        let z = SectorZone::new(Point::new(7.0, 7.0), 0.0, Angle::ZERO, Angle::ZERO).unwrap();
        for t in [0.0, 0.5, 1.0, f64::NAN] {
            let p = z.boundary_parametric(t);
            assert_eq!(p, Point::new(7.0, 7.0));
        }
        assert!(z.is_in_sector(&Point::new(7.0, 7.0)));
        assert!(!z.is_in_sector(&Point::new(8.0, 7.0)));

        let ray = SectorZone::new(Point::ORIGIN, 10.0, Angle::QUARTER_CIRCLE, Angle::QUARTER_CIRCLE)
            .unwrap();
        assert_eq!(ray.breakpoints(), (0.5, 0.5));
        let p = ray.boundary_parametric(0.75);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(ray.is_in_sector(&Point::new(5.0, 0.0)));
        assert!(!ray.is_in_sector(&Point::new(5.0, 1.0)));
    }

    #[test]
    fn radial_points_near_the_apex_are_inside() {
        let z = SectorZone::new(
            Point::new(43_210.987, -31_415.926),
            1000.0,
            Angle::from_degrees(33.3),
            Angle::from_degrees(77.7),
        )
        .unwrap();
        let (b1, b2) = z.breakpoints();
        let total = 1000.0 / b1;
        let mut d = 1e-6;
        while d < 2.0 {
            let out = z.boundary_parametric(d / total);
            let back = z.boundary_parametric(1.0 - d / total);
            assert!(z.is_in_sector(&out), "outward radial at {d} m");
            assert!(z.is_in_sector(&back), "inward radial at {d} m");
            d *= 1.3;
        }
        assert!(b2 > b1);
    }

    #[test]
    fn radial_slack_is_measured_in_metres() {
        let z = quadrant();
        // 1 µm beside the start radial at 500 m is tolerated; 1 mm is not.
        let along = GeoVector::new(500.0, Angle::from_degrees(45.0)).end_point(Point::ORIGIN);
        let side = GeoVector::new(1.0, Angle::from_degrees(-45.0));
        let near = along + (side.end_point(Point::ORIGIN) - Point::ORIGIN) * 5e-7;
        let far = along + (side.end_point(Point::ORIGIN) - Point::ORIGIN) * 1e-3;
        assert!(z.is_in_sector(&near));
        assert!(!z.is_in_sector(&far));
        // Far from the radials nothing is tolerated, whatever the distance.
        assert!(!z.is_in_sector(&Point::new(-500.0, 0.0)));
    }

    #[test]
    fn equivalence_ignores_placement() {
        let a = quadrant();
        let b = a.clone_at(Some(Point::new(-3000.0, 12.0)));
        assert!(a.equivalent(&b));
        assert!(close(b.sector_start(), Point::new(-3000.0, 12.0) + (a.sector_start() - Point::ORIGIN)));
        let mut c = b.clone();
        c.set_radius(999.0).unwrap();
        assert!(!a.equivalent(&c));
        let mut d = a.clone();
        d.set_end_radial(Angle::from_degrees(136.0));
        assert!(!a.equivalent(&d));
        assert_eq!(a.score_adjustment(), 0.0);
    }
}
